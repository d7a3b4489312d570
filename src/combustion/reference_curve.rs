use serde::{Deserialize, Serialize};

/// 과잉공기-효율 검증용 고정 기준 곡선(그래프 표시용).
/// 입력과 무관하게 모든 결과에 동일하게 실린다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurve {
    /// 과잉공기 [%]
    pub excess_air_points: [f64; 6],
    /// 모델 효율 [%]
    pub model_efficiency: [f64; 6],
    /// 실측 효율 [%]
    pub measured_efficiency: [f64; 6],
}

pub const REFERENCE_CURVE: ReferenceCurve = ReferenceCurve {
    excess_air_points: [10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
    model_efficiency: [78.5, 75.1, 72.0, 69.2, 66.8, 64.0],
    measured_efficiency: [79.2, 75.0, 71.5, 68.4, 66.0, 64.1],
};

impl ReferenceCurve {
    /// (과잉공기, 모델 효율, 실측 효율) 순서쌍.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.excess_air_points
            .iter()
            .zip(self.model_efficiency.iter())
            .zip(self.measured_efficiency.iter())
            .map(|((&x, &m), &a)| (x, m, a))
    }
}
