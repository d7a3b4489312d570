/// 연료 소비량/비용 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct FuelCostInput {
    /// 로 부하 [GJ/h]
    pub load_gj_per_hour: f64,
    /// 저위발열량 [kJ/kg]
    pub lhv_kj_per_kg: f64,
    /// 로 효율 분율 (클램프 전 값)
    pub efficiency: f64,
    /// 연료 단가 [통화/tonne]
    pub cost_per_tonne: f64,
}

/// 연료 비용 계산 결과.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuelCostResult {
    /// 연료 소비량 [kg/h]
    pub fuel_kg_per_hour: f64,
    /// 시간당 연료비 [통화/h]
    pub cost_per_hour: f64,
    /// 유효 열량 단가 [통화/GJ]
    pub cost_per_gj: f64,
    /// 분모가 0이라 모든 값을 0으로 둔 경우 true
    pub unavailable: bool,
}

/// 부하를 만족하는 연료량과 연료비를 계산한다.
///
/// LHV, 효율, 부하 중 하나라도 0이면 세 값 모두 0을 반환한다.
pub fn fuel_cost(input: FuelCostInput) -> FuelCostResult {
    let lhv_gj_per_kg = input.lhv_kj_per_kg / 1e6;
    let useful_gj_per_kg = lhv_gj_per_kg * input.efficiency;
    if useful_gj_per_kg == 0.0 || input.load_gj_per_hour == 0.0 {
        return FuelCostResult {
            unavailable: true,
            ..FuelCostResult::default()
        };
    }
    let fuel_kg_per_hour = input.load_gj_per_hour / useful_gj_per_kg;
    let cost_per_hour = (fuel_kg_per_hour / 1000.0) * input.cost_per_tonne;
    FuelCostResult {
        fuel_kg_per_hour,
        cost_per_hour,
        cost_per_gj: cost_per_hour / input.load_gj_per_hour,
        unavailable: false,
    }
}
