//! 시뮬레이션 실행 요청과 기록.
//!
//! 계산과 저장을 분리한다: 요청을 카탈로그에 대해 실행해 불변 기록을 만들고,
//! 저장은 외부 실행이력 저장소가 `RunRecord`를 직렬화해 처리한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combustion::{evaluate, FuelCatalog, FuelComposition, OperatingInputs, SimulationResult};

/// 실행 요청 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// 연료 미지정/미등록. 모델 호출 전에 호출 계층에서 걸러낸다.
    #[error("유효한 연료를 선택하세요: '{0}'을(를) 카탈로그에서 찾을 수 없음")]
    FuelNotFound(String),
}

/// 시뮬레이션 실행 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub name: String,
    pub fuel_name: String,
    pub inputs: OperatingInputs,
}

impl RunRequest {
    pub fn new(
        name: impl Into<String>,
        fuel_name: impl Into<String>,
        inputs: OperatingInputs,
    ) -> Self {
        Self {
            name: name.into(),
            fuel_name: fuel_name.into(),
            inputs,
        }
    }

    /// 카탈로그에서 연료를 찾아 모델을 실행한다.
    pub fn execute(&self, catalog: &FuelCatalog) -> Result<RunRecord, RunError> {
        let fuel = catalog
            .get(&self.fuel_name)
            .ok_or_else(|| RunError::FuelNotFound(self.fuel_name.clone()))?;
        Ok(RunRecord::compute(self.name.clone(), fuel, self.inputs))
    }
}

/// 입력과 결과를 묶은 불변 실행 기록. 당시 연료 조성을 함께 보관한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub name: String,
    pub fuel: FuelComposition,
    pub inputs: OperatingInputs,
    pub result: SimulationResult,
}

impl RunRecord {
    pub fn compute(name: String, fuel: &FuelComposition, inputs: OperatingInputs) -> Self {
        Self {
            name,
            fuel: fuel.clone(),
            inputs,
            result: evaluate(fuel, inputs),
        }
    }

    /// 기록된 입력으로 다시 계산한다(결과 화면 재생성용).
    pub fn recompute(&self) -> SimulationResult {
        evaluate(&self.fuel, self.inputs)
    }
}
