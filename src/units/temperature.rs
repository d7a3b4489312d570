use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 결과 표시용 온도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
    }
}

/// 모델이 내는 섭씨 온도를 표시 단위로 바꾼다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    convert_temperature(value_c, TemperatureUnit::Celsius, unit)
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let k = to_kelvin(value, from);
    from_kelvin(k, to)
}
