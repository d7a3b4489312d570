use serde::{Deserialize, Serialize};

/// 건조 연료 기준 원소분석(ultimate analysis) 질량분율.
///
/// 각 값은 0~1 범위의 분율이며 합이 정확히 1일 필요는 없다.
/// NaN 등 수치가 아닌 값은 "분석값 없음"으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UltimateAnalysis {
    /// 탄소(C)
    pub carbon: f64,
    /// 수소(H)
    pub hydrogen: f64,
    /// 산소(O)
    pub oxygen: f64,
    /// 질소(N)
    pub nitrogen: f64,
    /// 황(S)
    pub sulfur: f64,
    /// 회분(Ash)
    pub ash: f64,
}

impl UltimateAnalysis {
    pub const fn new(
        carbon: f64,
        hydrogen: f64,
        oxygen: f64,
        nitrogen: f64,
        sulfur: f64,
        ash: f64,
    ) -> Self {
        Self {
            carbon,
            hydrogen,
            oxygen,
            nitrogen,
            sulfur,
            ash,
        }
    }

    /// 이론공기량 계산에 쓰이는 C/H/S/O가 모두 수치인지 확인한다.
    pub fn has_numeric_air_terms(&self) -> bool {
        [self.carbon, self.hydrogen, self.sulfur, self.oxygen]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// 연료 카탈로그 항목. 모델은 이 값을 읽기만 하고 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelComposition {
    pub name: String,
    #[serde(flatten)]
    pub analysis: UltimateAnalysis,
    /// 고위발열량 HHV [MJ/kg]
    pub hhv_mj_per_kg: f64,
    /// 연료 단가 [통화/tonne]
    pub cost_per_tonne: f64,
}

impl FuelComposition {
    pub fn new(
        name: impl Into<String>,
        analysis: UltimateAnalysis,
        hhv_mj_per_kg: f64,
        cost_per_tonne: f64,
    ) -> Self {
        Self {
            name: name.into(),
            analysis,
            hhv_mj_per_kg,
            cost_per_tonne,
        }
    }
}

/// 1회 시뮬레이션 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingInputs {
    /// 수분 [% as-fired], 실무 범위 1~50
    pub moisture_percent: f64,
    /// 과잉공기율 [%], 실무 범위 10~200
    pub excess_air_percent: f64,
    /// 로 부하 [GJ/h]
    pub furnace_load_gj_per_hour: f64,
}

impl Default for OperatingInputs {
    fn default() -> Self {
        Self {
            moisture_percent: 10.0,
            excess_air_percent: 30.0,
            furnace_load_gj_per_hour: 1.0,
        }
    }
}

impl OperatingInputs {
    pub fn new(
        moisture_percent: f64,
        excess_air_percent: f64,
        furnace_load_gj_per_hour: f64,
    ) -> Self {
        Self {
            moisture_percent,
            excess_air_percent,
            furnace_load_gj_per_hour,
        }
    }

    /// 수분 분율(0~1).
    pub fn moisture_fraction(&self) -> f64 {
        self.moisture_percent / 100.0
    }

    /// 과잉공기 분율.
    pub fn excess_air_fraction(&self) -> f64 {
        self.excess_air_percent / 100.0
    }

    pub fn with_moisture(self, moisture_percent: f64) -> Self {
        Self {
            moisture_percent,
            ..self
        }
    }

    pub fn with_excess_air(self, excess_air_percent: f64) -> Self {
        Self {
            excess_air_percent,
            ..self
        }
    }
}
