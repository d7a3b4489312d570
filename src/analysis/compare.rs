use serde::{Deserialize, Serialize};

use crate::combustion::{evaluate, FuelComposition, OperatingInputs, SimulationResult};

/// 연료 비교 표의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelComparisonRow {
    pub fuel_name: String,
    pub result: SimulationResult,
}

/// 같은 운전 조건에서 여러 연료를 평가한다. 입력 순서를 유지한다.
pub fn compare_fuels<'a, I>(fuels: I, inputs: OperatingInputs) -> Vec<FuelComparisonRow>
where
    I: IntoIterator<Item = &'a FuelComposition>,
{
    fuels
        .into_iter()
        .map(|fuel| FuelComparisonRow {
            fuel_name: fuel.name.clone(),
            result: evaluate(fuel, inputs),
        })
        .collect()
}

/// 열량 단가 오름차순 정렬. 비용을 구하지 못한 연료(0)는 뒤로 보낸다.
pub fn rank_by_cost_per_gj(rows: &mut [FuelComparisonRow]) {
    rows.sort_by(|a, b| {
        let key = |r: &FuelComparisonRow| {
            let c = r.result.cost_per_gj;
            (c <= 0.0 || !c.is_finite(), c)
        };
        let (a_missing, a_cost) = key(a);
        let (b_missing, b_cost) = key(b);
        a_missing.cmp(&b_missing).then(a_cost.total_cmp(&b_cost))
    });
}
