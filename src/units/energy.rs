use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 로 부하 입력용 에너지 단위(시간당). 내부 기준은 GJ이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum EnergyUnit {
    #[value(name = "gj")]
    Gigajoule,
    #[value(name = "mj")]
    Megajoule,
    #[value(name = "kwh")]
    KilowattHour,
    #[value(name = "mmbtu")]
    MillionBtu,
}

impl EnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Gigajoule => "GJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::MillionBtu => "MMBtu",
        }
    }
}

fn to_gigajoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Gigajoule => value,
        EnergyUnit::Megajoule => value / 1000.0,
        EnergyUnit::KilowattHour => value * 0.0036,
        EnergyUnit::MillionBtu => value * 1.055_06,
    }
}

fn from_gigajoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Gigajoule => value,
        EnergyUnit::Megajoule => value * 1000.0,
        EnergyUnit::KilowattHour => value / 0.0036,
        EnergyUnit::MillionBtu => value / 1.055_06,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    from_gigajoule(to_gigajoule(value, from), to)
}

/// 시간당 부하를 모델 입력 단위(GJ/h)로 바꾼다.
pub fn load_to_gj_per_hour(value: f64, unit: EnergyUnit) -> f64 {
    to_gigajoule(value, unit)
}
