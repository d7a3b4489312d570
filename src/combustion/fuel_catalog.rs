//! 바이오매스 연료 카탈로그. 기본 연료 3종을 내장하고 TOML 파일로 확장할 수 있다.
//! 값은 대표 문헌값이며 실제 연료는 로트별 분석값으로 교체해야 한다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fuel::{FuelComposition, UltimateAnalysis};

/// 카탈로그 로드/검증 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("연료 이름이 중복됨: {0}")]
    DuplicateName(String),
    #[error("연료 이름이 비어 있음")]
    EmptyName,
    #[error("{name}: HHV는 0보다 커야 함 (입력 {value})")]
    InvalidHhv { name: String, value: f64 },
    #[error("{name}: 연료 단가는 0 이상이어야 함 (입력 {value})")]
    InvalidCost { name: String, value: f64 },
    #[error("{name}: {element} 분율 {value}이(가) 0~1 범위를 벗어남")]
    FractionOutOfRange {
        name: String,
        element: &'static str,
        value: f64,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fuel: Vec<FuelComposition>,
}

/// 연료 목록. 삽입 순서를 유지한다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuelCatalog {
    fuels: Vec<FuelComposition>,
}

fn builtin_fuels() -> Vec<FuelComposition> {
    vec![
        FuelComposition::new(
            "Rice Husk",
            UltimateAnalysis::new(0.35, 0.04, 0.40, 0.005, 0.005, 0.20),
            16.0,
            50.0,
        ),
        FuelComposition::new(
            "Wood Chips",
            UltimateAnalysis::new(0.50, 0.06, 0.43, 0.002, 0.001, 0.01),
            19.5,
            50.0,
        ),
        FuelComposition::new(
            "Sugarcane Bagasse",
            UltimateAnalysis::new(0.47, 0.06, 0.44, 0.003, 0.001, 0.02),
            17.5,
            50.0,
        ),
    ]
}

impl FuelCatalog {
    /// 내장 연료 3종(왕겨, 우드칩, 사탕수수 버개스).
    pub fn builtin() -> Self {
        Self {
            fuels: builtin_fuels(),
        }
    }

    /// 검증을 거쳐 카탈로그를 만든다.
    pub fn from_fuels(fuels: Vec<FuelComposition>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for fuel in fuels {
            validate_fuel(&fuel)?;
            if catalog.get(&fuel.name).is_some() {
                return Err(CatalogError::DuplicateName(fuel.name));
            }
            catalog.fuels.push(fuel);
        }
        Ok(catalog)
    }

    /// `[[fuel]]` 테이블 배열 형식의 TOML 문자열을 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::from_fuels(file.fuel)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 다른 카탈로그를 병합한다. 같은 이름은 `other` 쪽 값으로 덮어쓴다.
    pub fn merge(mut self, other: FuelCatalog) -> Self {
        for fuel in other.fuels {
            match self
                .fuels
                .iter_mut()
                .find(|f| same_name(&f.name, &fuel.name))
            {
                Some(existing) => *existing = fuel,
                None => self.fuels.push(fuel),
            }
        }
        self
    }

    /// 이름으로 연료를 찾는다(대소문자/앞뒤 공백 무시).
    pub fn get(&self, name: &str) -> Option<&FuelComposition> {
        self.fuels.iter().find(|f| same_name(&f.name, name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FuelComposition> {
        self.fuels.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fuels.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// 카탈로그 항목의 범위 검증. 모델 자체는 검증하지 않으므로 호출 계층에서 수행한다.
pub fn validate_fuel(fuel: &FuelComposition) -> Result<(), CatalogError> {
    if fuel.name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if !(fuel.hhv_mj_per_kg > 0.0) || !fuel.hhv_mj_per_kg.is_finite() {
        return Err(CatalogError::InvalidHhv {
            name: fuel.name.clone(),
            value: fuel.hhv_mj_per_kg,
        });
    }
    if !(fuel.cost_per_tonne >= 0.0) || !fuel.cost_per_tonne.is_finite() {
        return Err(CatalogError::InvalidCost {
            name: fuel.name.clone(),
            value: fuel.cost_per_tonne,
        });
    }
    let a = &fuel.analysis;
    let elements = [
        ("C", a.carbon),
        ("H", a.hydrogen),
        ("O", a.oxygen),
        ("N", a.nitrogen),
        ("S", a.sulfur),
        ("Ash", a.ash),
    ];
    for (element, value) in elements {
        if !(0.0..=1.0).contains(&value) {
            return Err(CatalogError::FractionOutOfRange {
                name: fuel.name.clone(),
                element,
                value,
            });
        }
    }
    Ok(())
}
