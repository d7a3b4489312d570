use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::{
    compare_fuels, import_validation_file, rank_by_cost_per_gj, run_sweep, SweepError,
    SweepRequest, ValidationError, ValidationImportOptions,
};
use crate::combustion::{CatalogError, FuelCatalog, FuelComposition, OperatingInputs};
use crate::config::{self, Config, ConfigError};
use crate::run::{RunError, RunRequest};
use crate::ui_cli::{self, Cli, Command, ConfigAction, OperatingArgs};
use crate::units::load_to_gj_per_hour;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("연료 카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    #[error("실행 오류: {0}")]
    Run(#[from] RunError),
    #[error("스윕 오류: {0}")]
    Sweep(#[from] SweepError),
    #[error("검증 데이터 오류: {0}")]
    Validation(#[from] ValidationError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 파싱된 명령행을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Simulate {
            name,
            operating,
            temp_unit,
        } => {
            let (cfg, catalog) = load_context(&config_path)?;
            let fuel_name = fuel_name(&cfg, &operating);
            let request = RunRequest::new(name, fuel_name, operating_inputs(&cfg, &operating));
            let record = request.execute(&catalog)?;
            if json {
                print_json(&record)?;
                ui_cli::print_warnings(&record.result);
            } else {
                let unit = temp_unit.unwrap_or(cfg.display.temperature);
                let load_unit = operating.load_unit.unwrap_or(cfg.display.load_energy);
                ui_cli::print_record(&record, unit, load_unit, verbose);
            }
        }
        Command::Sweep {
            operating,
            variable,
            start,
            end,
            steps,
        } => {
            let (cfg, catalog) = load_context(&config_path)?;
            let fuel = resolve_fuel(&catalog, &fuel_name(&cfg, &operating))?;
            let inputs = operating_inputs(&cfg, &operating);
            let request = SweepRequest {
                variable: variable.unwrap_or(cfg.sweep.variable),
                start: start.unwrap_or(cfg.sweep.start),
                end: end.unwrap_or(cfg.sweep.end),
                steps: steps.unwrap_or(cfg.sweep.steps),
                constant_moisture_percent: operating
                    .moisture
                    .unwrap_or(cfg.sweep.constant_moisture_percent),
                constant_excess_air_percent: operating
                    .excess_air
                    .unwrap_or(cfg.sweep.constant_excess_air_percent),
                constant_load_gj_per_hour: inputs.furnace_load_gj_per_hour,
            };
            let series = run_sweep(fuel, &request)?;
            if json {
                print_json(&series)?;
            } else {
                ui_cli::print_sweep(&fuel.name, &series);
            }
        }
        Command::Validate {
            file,
            operating,
            x_column,
            y_column,
            delimiter,
        } => {
            let (cfg, catalog) = load_context(&config_path)?;
            let fuel = resolve_fuel(&catalog, &fuel_name(&cfg, &operating))?;
            let options = ValidationImportOptions {
                x_column: x_column.unwrap_or_else(|| cfg.validation.x_column.clone()),
                y_column: y_column.unwrap_or_else(|| cfg.validation.y_column.clone()),
                delimiter: delimiter.unwrap_or(cfg.validation.delimiter),
            };
            let base = operating_inputs(&cfg, &operating);
            let report = import_validation_file(&file, fuel, base, &options)?;
            if json {
                print_json(&report)?;
            } else {
                ui_cli::print_validation(&fuel.name, &report);
            }
        }
        Command::Compare { operating, rank } => {
            let (cfg, catalog) = load_context(&config_path)?;
            let inputs = operating_inputs(&cfg, &operating);
            let mut rows = compare_fuels(catalog.iter(), inputs);
            if rank {
                rank_by_cost_per_gj(&mut rows);
            }
            if json {
                print_json(&rows)?;
            } else {
                ui_cli::print_comparison(&rows, cfg.display.temperature);
            }
        }
        Command::Fuels => {
            let (_, catalog) = load_context(&config_path)?;
            if json {
                print_json(&catalog)?;
            } else {
                ui_cli::print_catalog(&catalog);
            }
        }
        Command::Config { action } => handle_config(&config_path, action, json)?,
    }
    Ok(())
}

fn load_context(config_path: &Path) -> Result<(Config, FuelCatalog), AppError> {
    let cfg = config::load_or_default(config_path)?;
    let catalog = load_catalog(&cfg)?;
    Ok((cfg, catalog))
}

fn handle_config(path: &Path, action: ConfigAction, json: bool) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => {
            let cfg = if path.exists() {
                config::load(path)?
            } else {
                Config::default()
            };
            if json {
                print_json(&cfg)?;
            } else {
                print!("{}", cfg.to_toml()?);
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                println!("설정 파일이 이미 있습니다: {}", path.display());
            } else {
                Config::default().save(path)?;
                println!("기본 설정을 생성했습니다: {}", path.display());
            }
        }
    }
    Ok(())
}

/// 내장 카탈로그에 설정된 외부 카탈로그를 병합한다.
pub fn load_catalog(cfg: &Config) -> Result<FuelCatalog, CatalogError> {
    let builtin = FuelCatalog::builtin();
    match &cfg.catalog_path {
        Some(path) => Ok(builtin.merge(FuelCatalog::from_path(path)?)),
        None => Ok(builtin),
    }
}

fn resolve_fuel<'a>(catalog: &'a FuelCatalog, name: &str) -> Result<&'a FuelComposition, RunError> {
    catalog
        .get(name)
        .ok_or_else(|| RunError::FuelNotFound(name.to_string()))
}

fn fuel_name(cfg: &Config, args: &OperatingArgs) -> String {
    args.fuel.clone().unwrap_or_else(|| cfg.defaults.fuel.clone())
}

/// 명령행 값이 있으면 쓰고, 없으면 설정 기본값을 쓴다. 부하는 GJ/h로 환산한다.
pub fn operating_inputs(cfg: &Config, args: &OperatingArgs) -> OperatingInputs {
    let load = args.load.unwrap_or(cfg.defaults.furnace_load_per_hour);
    let load_unit = args.load_unit.unwrap_or(cfg.display.load_energy);
    OperatingInputs::new(
        args.moisture.unwrap_or(cfg.defaults.moisture_percent),
        args.excess_air.unwrap_or(cfg.defaults.excess_air_percent),
        load_to_gj_per_hour(load, load_unit),
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
