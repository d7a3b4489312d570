use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::{SweepRequest, SweepVariable, ValidationImportOptions};
use crate::combustion::OperatingInputs;
use crate::units::{EnergyUnit, TemperatureUnit};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 결과 표시/입력 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    /// 로 부하 입력 단위(시간당)
    pub load_energy: EnergyUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            load_energy: EnergyUnit::Gigajoule,
        }
    }
}

/// 명령행에서 생략한 운전 조건의 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingDefaults {
    pub fuel: String,
    pub moisture_percent: f64,
    pub excess_air_percent: f64,
    /// `DisplayUnits::load_energy` 단위의 시간당 부하
    pub furnace_load_per_hour: f64,
}

impl Default for OperatingDefaults {
    fn default() -> Self {
        let inputs = OperatingInputs::default();
        Self {
            fuel: "Wood Chips".to_string(),
            moisture_percent: inputs.moisture_percent,
            excess_air_percent: inputs.excess_air_percent,
            furnace_load_per_hour: inputs.furnace_load_gj_per_hour,
        }
    }
}

/// 파라메트릭 스윕 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepDefaults {
    pub variable: SweepVariable,
    pub start: f64,
    pub end: f64,
    pub steps: usize,
    pub constant_moisture_percent: f64,
    pub constant_excess_air_percent: f64,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        let req = SweepRequest::default();
        Self {
            variable: req.variable,
            start: req.start,
            end: req.end,
            steps: req.steps,
            constant_moisture_percent: req.constant_moisture_percent,
            constant_excess_air_percent: req.constant_excess_air_percent,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 추가 연료 카탈로그(TOML). 내장 연료에 병합된다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub display: DisplayUnits,
    pub defaults: OperatingDefaults,
    pub sweep: SweepDefaults,
    pub validation: ValidationImportOptions,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

/// 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
