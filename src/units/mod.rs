//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod temperature;

pub use energy::{convert_energy, load_to_gj_per_hour, EnergyUnit};
pub use temperature::{convert_temperature, from_celsius, TemperatureUnit};
