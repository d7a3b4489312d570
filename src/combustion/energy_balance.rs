use super::constants::*;
use super::mass_balance::finite_or_zero;

/// 에너지수지 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBalanceInput {
    /// 고위발열량 HHV [MJ/kg]
    pub hhv_mj_per_kg: f64,
    /// 수소 질량분율 (건조 기준)
    pub hydrogen: f64,
    /// 수분 분율 (0~1)
    pub moisture_fraction: f64,
    /// 건조분 분율
    pub dry_fraction: f64,
    /// 배가스 질량 [kg/kg]
    pub flue_gas_kg_per_kg: f64,
}

/// 에너지수지 결과.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBalanceResult {
    /// 배가스 중 총 수분(연료수분 + 수소 연소 생성수) [kg/kg]
    pub water_kg_per_kg: f64,
    /// 저위발열량 LHV [kJ/kg]
    pub lhv_kj_per_kg: f64,
    /// 습배가스 혼합 정압비열 [kJ/kgK]
    pub cp_mix_kj_per_kgk: f64,
    /// 비열 대체값(1.05)을 사용한 경우 true
    pub cp_fallback: bool,
    /// 단열화염온도 [K]
    pub adiabatic_temp_k: f64,
    /// 분모가 0이라 단열화염온도를 기준온도로 둔 경우 true
    pub adiabatic_fallback: bool,
}

/// 배가스 중 총 수분량 [kg/kg].
pub fn flue_gas_water(moisture_fraction: f64, hydrogen: f64, dry_fraction: f64) -> f64 {
    moisture_fraction + finite_or_zero(hydrogen) * WATER_PER_HYDROGEN * dry_fraction
}

/// HHV [MJ/kg]에서 생성수 증발잠열을 빼 LHV [kJ/kg]를 구한다.
pub fn lower_heating_value(hhv_mj_per_kg: f64, water_kg_per_kg: f64) -> f64 {
    hhv_mj_per_kg * 1000.0 - water_kg_per_kg * LATENT_HEAT_WATER
}

/// 건조가스/수증기 질량가중 혼합 비열을 구한다.
///
/// 배가스 질량이 0이거나 결과가 0.1 kJ/kgK 미만이면 `(1.05, true)`.
pub fn flue_gas_cp(flue_gas_kg_per_kg: f64, water_kg_per_kg: f64) -> (f64, bool) {
    if flue_gas_kg_per_kg == 0.0 {
        return (CP_FLUE_GAS_DRY, true);
    }
    let dry_gas = (flue_gas_kg_per_kg - water_kg_per_kg).max(0.0);
    let cp = (dry_gas * CP_FLUE_GAS_DRY) / flue_gas_kg_per_kg
        + (water_kg_per_kg * CP_WATER_VAPOR) / flue_gas_kg_per_kg;
    // NaN도 하한 검사에 걸리도록 부정 비교
    if !(cp >= CP_MIX_MIN) {
        return (CP_FLUE_GAS_DRY, true);
    }
    (cp, false)
}

/// 단열화염온도 [K]. 열용량이 0이면 `(T_REF_K, true)`.
pub fn adiabatic_flame_temperature(
    lhv_kj_per_kg: f64,
    flue_gas_kg_per_kg: f64,
    cp_mix: f64,
) -> (f64, bool) {
    let heat_capacity = flue_gas_kg_per_kg * cp_mix;
    if heat_capacity == 0.0 {
        return (T_REF_K, true);
    }
    (T_REF_K + lhv_kj_per_kg / heat_capacity, false)
}

/// LHV, 혼합 비열, 단열화염온도를 차례로 계산한다.
pub fn energy_balance(input: EnergyBalanceInput) -> EnergyBalanceResult {
    let water = flue_gas_water(input.moisture_fraction, input.hydrogen, input.dry_fraction);
    let lhv = lower_heating_value(input.hhv_mj_per_kg, water);
    let (cp_mix, cp_fallback) = flue_gas_cp(input.flue_gas_kg_per_kg, water);
    let (adiabatic_temp_k, adiabatic_fallback) =
        adiabatic_flame_temperature(lhv, input.flue_gas_kg_per_kg, cp_mix);

    EnergyBalanceResult {
        water_kg_per_kg: water,
        lhv_kj_per_kg: lhv,
        cp_mix_kj_per_kgk: cp_mix,
        cp_fallback,
        adiabatic_temp_k,
        adiabatic_fallback,
    }
}
