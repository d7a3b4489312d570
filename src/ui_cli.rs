//! 명령행 정의와 텍스트 결과 출력.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::analysis::{FuelComparisonRow, SweepSeries, SweepVariable, ValidationReport};
use crate::combustion::{FuelCatalog, SimulationResult};
use crate::run::RunRecord;
use crate::units::{convert_energy, from_celsius, EnergyUnit, TemperatureUnit};

/// 바이오매스 연소로 성능/비용/배출 추정 도구.
#[derive(Debug, Parser)]
#[command(name = "biomass_furnace_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    /// 중간 물질/에너지수지 값까지 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 단일 운전 조건 시뮬레이션
    Simulate {
        /// 실행 이름
        #[arg(long, default_value = "Simulation Run")]
        name: String,
        #[command(flatten)]
        operating: OperatingArgs,
        /// 온도 표시 단위
        #[arg(long, value_enum)]
        temp_unit: Option<TemperatureUnit>,
    },
    /// 수분 또는 과잉공기 파라메트릭 스윕
    Sweep {
        #[command(flatten)]
        operating: OperatingArgs,
        /// 변화시킬 변수
        #[arg(long, value_enum)]
        variable: Option<SweepVariable>,
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        end: Option<f64>,
        /// 시작/끝 포함 점 개수
        #[arg(long)]
        steps: Option<usize>,
    },
    /// 실측 (과잉공기, 효율) 표와 모델 비교
    Validate {
        /// 구분자로 나뉜 표 파일
        file: PathBuf,
        #[command(flatten)]
        operating: OperatingArgs,
        #[arg(long)]
        x_column: Option<String>,
        #[arg(long)]
        y_column: Option<String>,
        #[arg(long)]
        delimiter: Option<char>,
    },
    /// 카탈로그의 모든 연료를 같은 조건에서 비교
    Compare {
        #[command(flatten)]
        operating: OperatingArgs,
        /// 열량 단가 순으로 정렬
        #[arg(long)]
        rank: bool,
    },
    /// 연료 카탈로그 목록
    Fuels,
    /// 설정 파일 관리
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// 현재 설정 출력
    Show,
    /// 설정 파일이 없으면 기본값으로 생성
    Init,
}

/// 운전 조건 인자. 생략하면 설정 파일 기본값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct OperatingArgs {
    /// 연료 이름 (카탈로그)
    #[arg(long)]
    pub fuel: Option<String>,
    /// 수분 [%]
    #[arg(long)]
    pub moisture: Option<f64>,
    /// 과잉공기 [%]
    #[arg(long)]
    pub excess_air: Option<f64>,
    /// 시간당 로 부하
    #[arg(long)]
    pub load: Option<f64>,
    /// 부하 단위
    #[arg(long, value_enum)]
    pub load_unit: Option<EnergyUnit>,
}

/// 단일 실행 결과를 출력한다.
pub fn print_record(
    record: &RunRecord,
    temp_unit: TemperatureUnit,
    load_unit: EnergyUnit,
    verbose: bool,
) {
    let r = &record.result;
    let t = temp_unit.symbol();
    let load = convert_energy(
        record.inputs.furnace_load_gj_per_hour,
        EnergyUnit::Gigajoule,
        load_unit,
    );
    println!("\n=== {} ({}) ===", record.name, record.fuel.name);
    println!(
        "수분 {:.1} %, 과잉공기 {:.1} %, 부하 {:.3} {}/h",
        record.inputs.moisture_percent,
        record.inputs.excess_air_percent,
        load,
        load_unit.symbol()
    );
    println!("효율: {:.2} %", r.efficiency_percent);
    println!("LHV: {:.3} MJ/kg", r.lhv_mj_per_kg);
    println!(
        "단열화염온도: {:.1} {t}, 배기온도: {:.1} {t}",
        from_celsius(r.adiabatic_temp_c, temp_unit),
        from_celsius(r.exhaust_temp_c, temp_unit)
    );
    println!("배가스 CO2: {:.2} %", r.flue_gas_co2_percent);
    println!(
        "연료 소비: {:.2} kg/h, 연료비: {:.3} /h, {:.3} /GJ",
        r.fuel_kg_per_hour, r.cost_per_hour, r.cost_per_gj
    );
    println!("CO: {:.1} ppm, NOx: {:.1} ppm", r.co_ppm, r.nox_ppm);
    if verbose {
        print_balance(r);
        println!("기준 곡선 (과잉공기 %, 모델 %, 실측 %):");
        for (x, m, a) in r.reference_curve.points() {
            println!("  {x:>5.1}  {m:>6.1}  {a:>6.1}");
        }
    }
    print_warnings(r);
}

fn print_balance(r: &SimulationResult) {
    let b = &r.balance;
    println!("-- 물질/에너지수지 (연료 1 kg 기준) --");
    println!(
        "이론공기(건조): {:.4} kg/kg, 이론공기: {:.4} kg/kg, 실제공기: {:.4} kg/kg",
        b.stoich_air_dry_kg_per_kg, b.stoich_air_kg_per_kg, b.actual_air_kg_per_kg
    );
    println!(
        "배가스: {:.4} kg/kg, 수분: {:.4} kg/kg, cp: {:.4} kJ/kgK",
        b.flue_gas_kg_per_kg, b.water_kg_per_kg, b.cp_mix_kj_per_kgk
    );
    println!(
        "LHV: {:.1} kJ/kg, 배기손실: {:.1}, 고정손실: {:.1}, 회수열: {:.1} kJ/kg",
        b.lhv_kj_per_kg, b.exhaust_loss_kj_per_kg, b.fixed_loss_kj_per_kg, b.recovered_kj_per_kg
    );
    println!("클램프 전 효율: {:.3} %", r.raw_efficiency_percent);
}

/// 경고는 표준 오류로 출력한다.
pub fn print_warnings(r: &SimulationResult) {
    for w in r.warnings() {
        eprintln!("경고: {w}");
    }
}

pub fn print_sweep(fuel_name: &str, series: &SweepSeries) {
    println!("\n=== 파라메트릭 스윕: {} / {} ===", fuel_name, series.x_axis_label);
    println!("{:>10} {:>10} {:>10} {:>10}", "x", "효율 %", "/GJ", "CO ppm");
    for i in 0..series.len() {
        println!(
            "{:>10.3} {:>10.2} {:>10.3} {:>10.1}",
            series.x_values[i],
            series.efficiency_percent[i],
            series.cost_per_gj[i],
            series.co_ppm[i]
        );
    }
}

pub fn print_validation(fuel_name: &str, report: &ValidationReport) {
    println!("\n=== 실측 검증: {fuel_name} ===");
    println!("{:>10} {:>10} {:>10} {:>8}", "과잉공기 %", "실측 %", "모델 %", "오차");
    for p in &report.points {
        println!(
            "{:>10.1} {:>10.2} {:>10.2} {:>+8.2}",
            p.excess_air_percent,
            p.measured_efficiency_percent,
            p.model_efficiency_percent,
            p.error()
        );
    }
    match &report.summary {
        Some(s) => println!(
            "MAE {:.2} %p, RMSE {:.2} %p, 최대 {:.2} %p",
            s.mean_abs_error, s.rmse, s.max_abs_error
        ),
        None => println!("비교할 수 있는 행이 없습니다."),
    }
    if report.skipped_rows > 0 {
        eprintln!("경고: 수치가 아닌 {}개 행을 건너뛰었습니다.", report.skipped_rows);
    }
}

pub fn print_comparison(rows: &[FuelComparisonRow], temp_unit: TemperatureUnit) {
    let t = temp_unit.symbol();
    println!("\n=== 연료 비교 ===");
    println!(
        "{:<20} {:>8} {:>8} {:>10} {:>10} {:>8} {:>8}",
        "연료",
        "효율 %",
        "LHV",
        format!("T_ad {t}"),
        "/GJ",
        "CO",
        "NOx"
    );
    for row in rows {
        let r = &row.result;
        println!(
            "{:<20} {:>8.2} {:>8.3} {:>10.1} {:>10.3} {:>8.1} {:>8.1}",
            row.fuel_name,
            r.efficiency_percent,
            r.lhv_mj_per_kg,
            from_celsius(r.adiabatic_temp_c, temp_unit),
            r.cost_per_gj,
            r.co_ppm,
            r.nox_ppm
        );
    }
}

pub fn print_catalog(catalog: &FuelCatalog) {
    println!("\n=== 연료 카탈로그 ===");
    println!(
        "{:<20} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>8} {:>10}",
        "이름", "C", "H", "O", "N", "S", "Ash", "HHV", "단가/t"
    );
    for f in catalog.iter() {
        let a = &f.analysis;
        println!(
            "{:<20} {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>8.2} {:>10.2}",
            f.name,
            a.carbon,
            a.hydrogen,
            a.oxygen,
            a.nitrogen,
            a.sulfur,
            a.ash,
            f.hhv_mj_per_kg,
            f.cost_per_tonne
        );
    }
}
