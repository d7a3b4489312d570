use super::constants::*;

/// 배기/고정 손실 차감 방식의 로 효율 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct FurnaceEfficiencyInput {
    /// 저위발열량 [kJ/kg]
    pub lhv_kj_per_kg: f64,
    /// 배가스 질량 [kg/kg]
    pub flue_gas_kg_per_kg: f64,
    /// 배가스 혼합 비열 [kJ/kgK]
    pub cp_mix_kj_per_kgk: f64,
}

/// 로 효율 계산 결과. 열량은 연료 1 kg 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct FurnaceEfficiencyResult {
    /// 배기 엔탈피 손실 [kJ/kg]
    pub exhaust_loss_kj_per_kg: f64,
    /// 고정 손실(LHV의 10%) [kJ/kg]
    pub fixed_loss_kj_per_kg: f64,
    /// 회수 열량 [kJ/kg]
    pub recovered_kj_per_kg: f64,
    /// 클램프 전 효율 분율. LHV가 0이면 0.
    pub efficiency: f64,
    /// LHV가 0이라 효율을 0으로 둔 경우 true
    pub zero_heating_value: bool,
}

impl FurnaceEfficiencyResult {
    /// 보고용 효율 [%], 0~100으로 클램프. 수치가 아니면 0.
    pub fn clamped_percent(&self) -> f64 {
        let percent = self.efficiency * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }
}

/// 고정 배기온도(250 °C)와 고정 손실을 가정해 로 효율을 계산한다.
pub fn furnace_efficiency(input: FurnaceEfficiencyInput) -> FurnaceEfficiencyResult {
    let fixed_loss = FIXED_HEAT_LOSS_FRACTION * input.lhv_kj_per_kg;
    let exhaust_loss = input.flue_gas_kg_per_kg * input.cp_mix_kj_per_kgk * (T_EXHAUST_K - T_REF_K);
    let recovered = input.lhv_kj_per_kg - exhaust_loss - fixed_loss;

    let (efficiency, zero_heating_value) = if input.lhv_kj_per_kg == 0.0 {
        (0.0, true)
    } else {
        (recovered / input.lhv_kj_per_kg, false)
    };

    FurnaceEfficiencyResult {
        exhaust_loss_kj_per_kg: exhaust_loss,
        fixed_loss_kj_per_kg: fixed_loss,
        recovered_kj_per_kg: recovered,
        efficiency,
        zero_heating_value,
    }
}
