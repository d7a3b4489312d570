//! 경험식 기반 배출 추정. 경향 파악용이며 물리적으로 엄밀하지 않다.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// 배출 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsEstimate {
    pub co_ppm: f64,
    pub nox_ppm: f64,
    pub flue_gas_co2_percent: f64,
}

/// CO [ppm]. 과잉공기가 적을수록 급격히 증가하고 50 ppm으로 수렴한다.
pub fn co_ppm(excess_air_fraction: f64) -> f64 {
    CO_BASELINE_PPM + CO_PEAK_PPM * (-excess_air_fraction / CO_DECAY_EXCESS_AIR).exp()
}

/// 열적 NOx [ppm]. 단열화염온도를 대리 변수로 쓴다.
pub fn nox_ppm(adiabatic_temp_c: f64) -> f64 {
    NOX_REFERENCE_PPM * ((adiabatic_temp_c - NOX_REFERENCE_TEMP_C) / NOX_TEMP_SCALE_C).exp()
}

/// 배가스 CO2 [%] 근사. 음수가 되지 않는다.
pub fn flue_gas_co2_percent(excess_air_fraction: f64) -> f64 {
    let dilution = 1.0 + excess_air_fraction * CO2_DILUTION_FACTOR;
    if dilution <= 0.0 {
        return 0.0;
    }
    (CO2_MAX_PERCENT / dilution).max(0.0)
}

pub fn estimate_emissions(excess_air_fraction: f64, adiabatic_temp_c: f64) -> EmissionsEstimate {
    EmissionsEstimate {
        co_ppm: co_ppm(excess_air_fraction),
        nox_ppm: nox_ppm(adiabatic_temp_c),
        flue_gas_co2_percent: flue_gas_co2_percent(excess_air_fraction),
    }
}
