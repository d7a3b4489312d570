//! 연소 모델 상수.

/// 건조 배가스 정압비열 [kJ/kgK]
pub const CP_FLUE_GAS_DRY: f64 = 1.05;
/// 수증기 정압비열 [kJ/kgK]
pub const CP_WATER_VAPOR: f64 = 1.872;
/// 물리적으로 허용하는 혼합 비열 하한 [kJ/kgK]
pub const CP_MIX_MIN: f64 = 0.1;
/// 물 증발잠열 [kJ/kg]
pub const LATENT_HEAT_WATER: f64 = 2257.0;
/// 기준 온도 [K] (25 °C)
pub const T_REF_K: f64 = 298.15;
/// 고정 배기 온도 [K] (250 °C)
pub const T_EXHAUST_K: f64 = 523.15;
/// 켈빈-섭씨 오프셋
pub const KELVIN_OFFSET: f64 = 273.15;
/// 복사/기타 손실 (LHV 대비 고정 10%)
pub const FIXED_HEAT_LOSS_FRACTION: f64 = 0.10;
/// 수소 1 kg 연소 시 생성되는 물 [kg]
pub const WATER_PER_HYDROGEN: f64 = 9.0;

/// Dulong 형 이론공기 계수 [kg air / kg 원소]
pub const AIR_PER_CARBON: f64 = 11.5;
pub const AIR_PER_HYDROGEN: f64 = 34.5;
pub const AIR_PER_SULFUR: f64 = 4.3;
pub const AIR_PER_OXYGEN: f64 = 4.3;

/// CO 기저 농도 [ppm]
pub const CO_BASELINE_PPM: f64 = 50.0;
/// 저과잉공기 CO 증가폭 [ppm]
pub const CO_PEAK_PPM: f64 = 1000.0;
/// CO 감쇠 상수 (과잉공기 분율)
pub const CO_DECAY_EXCESS_AIR: f64 = 0.1;
/// NOx 기준 농도 [ppm] (화염온도 1000 °C 기준)
pub const NOX_REFERENCE_PPM: f64 = 10.0;
pub const NOX_REFERENCE_TEMP_C: f64 = 1000.0;
pub const NOX_TEMP_SCALE_C: f64 = 500.0;
/// 이론 최대 CO2 농도 [%]
pub const CO2_MAX_PERCENT: f64 = 20.0;
pub const CO2_DILUTION_FACTOR: f64 = 1.5;
