use super::constants::*;
use super::fuel::UltimateAnalysis;

/// 물질수지 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct MassBalanceInput {
    pub analysis: UltimateAnalysis,
    /// 수분 분율 (0~1)
    pub moisture_fraction: f64,
    /// 과잉공기 분율 (0.3 = 30%)
    pub excess_air_fraction: f64,
}

/// 물질수지 결과. 모든 질량은 as-fired 연료 1 kg 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct MassBalanceResult {
    /// 건조분 분율 (1 - 수분)
    pub dry_fraction: f64,
    /// 건조연료 기준 이론공기량 [kg/kg-DF]
    pub stoich_air_dry_kg_per_kg: f64,
    /// 이론공기량 [kg/kg]
    pub stoich_air_kg_per_kg: f64,
    /// 실제 공급공기량 [kg/kg]
    pub actual_air_kg_per_kg: f64,
    /// 배가스 질량 [kg/kg]
    pub flue_gas_kg_per_kg: f64,
    /// 원소분석 값 중 수치가 아닌 항목을 0으로 대체한 경우 true
    pub analysis_fallback: bool,
}

/// Dulong 형 상관식으로 건조연료 기준 이론공기량을 구한다.
/// C/H/S/O 중 하나라도 수치가 아니면 `None`.
pub fn stoichiometric_air_dry(analysis: &UltimateAnalysis) -> Option<f64> {
    if !analysis.has_numeric_air_terms() {
        return None;
    }
    Some(
        AIR_PER_CARBON * analysis.carbon
            + AIR_PER_HYDROGEN * analysis.hydrogen
            + AIR_PER_SULFUR * analysis.sulfur
            - AIR_PER_OXYGEN * analysis.oxygen,
    )
}

/// 이론/실제 공기량과 배가스 질량을 계산한다.
pub fn mass_balance(input: MassBalanceInput) -> MassBalanceResult {
    let dry_fraction = 1.0 - input.moisture_fraction;
    let (stoich_air_dry, analysis_fallback) = match stoichiometric_air_dry(&input.analysis) {
        Some(a) => (a, false),
        None => (0.0, true),
    };
    let stoich_air = stoich_air_dry * dry_fraction;
    let actual_air = stoich_air * (1.0 + input.excess_air_fraction);
    let ash = finite_or_zero(input.analysis.ash);
    let flue_gas = dry_fraction + actual_air - ash * dry_fraction;
    let analysis_fallback = analysis_fallback || !input.analysis.ash.is_finite();

    MassBalanceResult {
        dry_fraction,
        stoich_air_dry_kg_per_kg: stoich_air_dry,
        stoich_air_kg_per_kg: stoich_air,
        actual_air_kg_per_kg: actual_air,
        flue_gas_kg_per_kg: flue_gas,
        analysis_fallback,
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
