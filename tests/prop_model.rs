//! 연소 모델 성질 기반 테스트(proptest).
//!
//! 대상: 효율 범위, CO2 비음수, 과잉공기에 대한 CO 단조감소,
//! 기준 곡선 불변, 반복 호출 동일성.

use biomass_furnace_toolbox::combustion::{
    evaluate, FuelComposition, OperatingInputs, UltimateAnalysis, REFERENCE_CURVE,
};
use proptest::prelude::*;

fn fuel_strategy() -> impl Strategy<Value = FuelComposition> {
    (
        0.3f64..0.6,
        0.03f64..0.08,
        0.25f64..0.45,
        0.0f64..0.01,
        0.0f64..0.01,
        0.0f64..0.25,
        12.0f64..22.0,
        0.0f64..200.0,
    )
        .prop_map(|(c, h, o, n, s, ash, hhv, cost)| {
            FuelComposition::new("prop", UltimateAnalysis::new(c, h, o, n, s, ash), hhv, cost)
        })
}

proptest! {
    /// 실무 범위 입력에서 효율은 0~100 %, CO2는 0 이상.
    #[test]
    fn efficiency_and_co2_stay_in_range(
        fuel in fuel_strategy(),
        moisture in 1.0f64..50.0,
        excess_air in 10.0f64..200.0,
        load in 0.1f64..100.0,
    ) {
        let r = evaluate(&fuel, OperatingInputs::new(moisture, excess_air, load));
        prop_assert!((0.0..=100.0).contains(&r.efficiency_percent));
        prop_assert!(r.flue_gas_co2_percent >= 0.0);
        prop_assert!(r.co_ppm >= 50.0);
        prop_assert!(r.nox_ppm >= 0.0);
    }

    /// 다른 조건이 같으면 과잉공기가 늘수록 CO는 감소한다.
    #[test]
    fn co_decreases_with_excess_air(
        fuel in fuel_strategy(),
        moisture in 1.0f64..50.0,
        excess_air in 0.0f64..60.0,
        delta in 1.0f64..40.0,
    ) {
        let lo = evaluate(&fuel, OperatingInputs::new(moisture, excess_air, 1.0));
        let hi = evaluate(&fuel, OperatingInputs::new(moisture, excess_air + delta, 1.0));
        prop_assert!(hi.co_ppm < lo.co_ppm);
        prop_assert!(hi.co_ppm > 50.0);
    }

    /// 기준 곡선은 입력과 무관하다.
    #[test]
    fn reference_curve_ignores_inputs(
        fuel in fuel_strategy(),
        moisture in 0.0f64..90.0,
        excess_air in 0.0f64..500.0,
        load in 0.0f64..100.0,
    ) {
        let r = evaluate(&fuel, OperatingInputs::new(moisture, excess_air, load));
        prop_assert_eq!(r.reference_curve, REFERENCE_CURVE);
    }

    /// 같은 입력이면 결과가 같다.
    #[test]
    fn evaluation_is_deterministic(
        fuel in fuel_strategy(),
        moisture in 1.0f64..50.0,
        excess_air in 10.0f64..200.0,
        load in 0.1f64..100.0,
    ) {
        let inputs = OperatingInputs::new(moisture, excess_air, load);
        prop_assert_eq!(evaluate(&fuel, inputs), evaluate(&fuel, inputs));
    }

    /// 부하가 0이면 연료량과 비용이 모두 0이다.
    #[test]
    fn zero_load_never_costs(
        fuel in fuel_strategy(),
        moisture in 1.0f64..50.0,
        excess_air in 10.0f64..200.0,
    ) {
        let r = evaluate(&fuel, OperatingInputs::new(moisture, excess_air, 0.0));
        prop_assert_eq!(r.cost_per_hour, 0.0);
        prop_assert_eq!(r.cost_per_gj, 0.0);
        prop_assert_eq!(r.fuel_kg_per_hour, 0.0);
    }
}
