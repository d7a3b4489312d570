use serde::{Deserialize, Serialize};

use super::constants::{KELVIN_OFFSET, T_EXHAUST_K};
use super::cost::{fuel_cost, FuelCostInput};
use super::efficiency::{furnace_efficiency, FurnaceEfficiencyInput};
use super::emissions::estimate_emissions;
use super::energy_balance::{energy_balance, EnergyBalanceInput};
use super::fuel::{FuelComposition, OperatingInputs};
use super::mass_balance::{mass_balance, MassBalanceInput};
use super::reference_curve::{ReferenceCurve, REFERENCE_CURVE};

/// 수치 보호 분기가 적용된 지점.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFallback {
    /// 원소분석 값이 수치가 아님 -> 해당 항을 0으로 대체
    InvalidAnalysis,
    /// 혼합 비열이 정의되지 않거나 0.1 미만 -> 1.05 kJ/kgK
    SpecificHeatDefault,
    /// 배가스 열용량 0 -> 단열화염온도 = 기준온도
    AdiabaticAtReference,
    /// LHV 0 -> 효율 0
    ZeroHeatingValue,
    /// 비용 계산 분모 0 -> 연료량/비용 0
    CostUnavailable,
}

impl std::fmt::Display for ModelFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFallback::InvalidAnalysis => {
                write!(f, "원소분석 값이 수치가 아니어서 0으로 대체했습니다.")
            }
            ModelFallback::SpecificHeatDefault => {
                write!(f, "배가스 혼합 비열을 구할 수 없어 1.05 kJ/kgK를 사용했습니다.")
            }
            ModelFallback::AdiabaticAtReference => {
                write!(f, "배가스 열용량이 0이라 단열화염온도를 기준온도로 두었습니다.")
            }
            ModelFallback::ZeroHeatingValue => write!(f, "LHV가 0이라 효율을 0으로 두었습니다."),
            ModelFallback::CostUnavailable => {
                write!(f, "LHV/효율/부하 중 0이 있어 연료비를 0으로 두었습니다.")
            }
        }
    }
}

/// 중간 물질/에너지수지 값. 진단 및 상세 출력용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombustionBalance {
    /// 건조연료 기준 이론공기량 [kg/kg-DF]
    pub stoich_air_dry_kg_per_kg: f64,
    /// 이론공기량 [kg/kg]
    pub stoich_air_kg_per_kg: f64,
    /// 실제 공기량 [kg/kg]
    pub actual_air_kg_per_kg: f64,
    /// 배가스 질량 [kg/kg]
    pub flue_gas_kg_per_kg: f64,
    /// 배가스 총 수분 [kg/kg]
    pub water_kg_per_kg: f64,
    /// LHV [kJ/kg]
    pub lhv_kj_per_kg: f64,
    /// 혼합 비열 [kJ/kgK]
    pub cp_mix_kj_per_kgk: f64,
    /// 배기 손실 [kJ/kg]
    pub exhaust_loss_kj_per_kg: f64,
    /// 고정 손실 [kJ/kg]
    pub fixed_loss_kj_per_kg: f64,
    /// 회수 열량 [kJ/kg]
    pub recovered_kj_per_kg: f64,
}

/// 1회 모델 평가 결과. 호출마다 새로 만들어지며 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 로 효율 [%], 0~100 클램프
    pub efficiency_percent: f64,
    /// 클램프 전 효율 [%]
    pub raw_efficiency_percent: f64,
    /// 배기 온도 [°C] (고정 250)
    pub exhaust_temp_c: f64,
    /// 배가스 CO2 [%]
    pub flue_gas_co2_percent: f64,
    /// 단열화염온도 [°C]
    pub adiabatic_temp_c: f64,
    /// 저위발열량 [MJ/kg]
    pub lhv_mj_per_kg: f64,
    /// 연료 소비량 [kg/h]
    pub fuel_kg_per_hour: f64,
    /// 열량 단가 [통화/GJ]
    pub cost_per_gj: f64,
    /// 시간당 연료비 [통화/h]
    pub cost_per_hour: f64,
    pub co_ppm: f64,
    pub nox_ppm: f64,
    pub reference_curve: ReferenceCurve,
    pub balance: CombustionBalance,
    /// 적용된 보호 분기 (계산 순서)
    pub fallbacks: Vec<ModelFallback>,
}

impl SimulationResult {
    /// 클램프 전 효율이 0~100 범위를 벗어났는지 여부.
    pub fn efficiency_clamped(&self) -> bool {
        self.raw_efficiency_percent != self.efficiency_percent
    }

    /// 사용자에게 보여줄 경고/주의 메시지.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self.fallbacks.iter().map(|f| f.to_string()).collect();
        if self.efficiency_clamped() {
            warnings.push(format!(
                "효율 {:.2} %가 0~100 % 범위를 벗어나 {:.2} %로 보정되었습니다.",
                self.raw_efficiency_percent, self.efficiency_percent
            ));
        }
        warnings
    }
}

/// 연료 조성과 운전 조건으로 로 성능, 비용, 배출을 추정한다.
///
/// 순수 함수이며 어떤 입력에 대해서도 실패하지 않는다. 0 나눗셈 등
/// 수치적 특이점은 정해진 대체값으로 흡수되고 `fallbacks`에 기록된다.
pub fn evaluate(fuel: &FuelComposition, inputs: OperatingInputs) -> SimulationResult {
    let moisture_fraction = inputs.moisture_fraction();
    let excess_air_fraction = inputs.excess_air_fraction();
    let mut fallbacks = Vec::new();

    // A. 물질수지
    let mass = mass_balance(MassBalanceInput {
        analysis: fuel.analysis,
        moisture_fraction,
        excess_air_fraction,
    });
    if mass.analysis_fallback {
        fallbacks.push(ModelFallback::InvalidAnalysis);
    }

    // B. 에너지수지
    let energy = energy_balance(EnergyBalanceInput {
        hhv_mj_per_kg: fuel.hhv_mj_per_kg,
        hydrogen: fuel.analysis.hydrogen,
        moisture_fraction,
        dry_fraction: mass.dry_fraction,
        flue_gas_kg_per_kg: mass.flue_gas_kg_per_kg,
    });
    if energy.cp_fallback {
        fallbacks.push(ModelFallback::SpecificHeatDefault);
    }
    if energy.adiabatic_fallback {
        fallbacks.push(ModelFallback::AdiabaticAtReference);
    }

    // C. 효율
    let eff = furnace_efficiency(FurnaceEfficiencyInput {
        lhv_kj_per_kg: energy.lhv_kj_per_kg,
        flue_gas_kg_per_kg: mass.flue_gas_kg_per_kg,
        cp_mix_kj_per_kgk: energy.cp_mix_kj_per_kgk,
    });
    if eff.zero_heating_value {
        fallbacks.push(ModelFallback::ZeroHeatingValue);
    }

    // D. 비용
    let cost = fuel_cost(FuelCostInput {
        load_gj_per_hour: inputs.furnace_load_gj_per_hour,
        lhv_kj_per_kg: energy.lhv_kj_per_kg,
        efficiency: eff.efficiency,
        cost_per_tonne: fuel.cost_per_tonne,
    });
    if cost.unavailable {
        fallbacks.push(ModelFallback::CostUnavailable);
    }

    // E. 배출
    let adiabatic_temp_c = energy.adiabatic_temp_k - KELVIN_OFFSET;
    let emissions = estimate_emissions(excess_air_fraction, adiabatic_temp_c);

    let raw_efficiency_percent = eff.efficiency * 100.0;
    SimulationResult {
        efficiency_percent: eff.clamped_percent(),
        raw_efficiency_percent,
        exhaust_temp_c: T_EXHAUST_K - KELVIN_OFFSET,
        flue_gas_co2_percent: emissions.flue_gas_co2_percent,
        adiabatic_temp_c,
        lhv_mj_per_kg: energy.lhv_kj_per_kg / 1e6 * 1000.0,
        fuel_kg_per_hour: cost.fuel_kg_per_hour,
        cost_per_gj: cost.cost_per_gj,
        cost_per_hour: cost.cost_per_hour,
        co_ppm: emissions.co_ppm,
        nox_ppm: emissions.nox_ppm,
        reference_curve: REFERENCE_CURVE,
        balance: CombustionBalance {
            stoich_air_dry_kg_per_kg: mass.stoich_air_dry_kg_per_kg,
            stoich_air_kg_per_kg: mass.stoich_air_kg_per_kg,
            actual_air_kg_per_kg: mass.actual_air_kg_per_kg,
            flue_gas_kg_per_kg: mass.flue_gas_kg_per_kg,
            water_kg_per_kg: energy.water_kg_per_kg,
            lhv_kj_per_kg: energy.lhv_kj_per_kg,
            cp_mix_kj_per_kgk: energy.cp_mix_kj_per_kgk,
            exhaust_loss_kj_per_kg: eff.exhaust_loss_kj_per_kg,
            fixed_loss_kj_per_kg: eff.fixed_loss_kj_per_kg,
            recovered_kj_per_kg: eff.recovered_kj_per_kg,
        },
        fallbacks,
    }
}
