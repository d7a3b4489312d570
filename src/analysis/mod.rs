//! 연소 모델을 반복 호출하는 배치 분석(파라메트릭 스윕, 실측 검증, 연료 비교).

pub mod compare;
pub mod sweep;
pub mod validation;

pub use compare::{compare_fuels, rank_by_cost_per_gj, FuelComparisonRow};
pub use sweep::{linspace, run_sweep, SweepError, SweepRequest, SweepSeries, SweepVariable};
pub use validation::{
    import_validation_file, parse_validation_table, validate_against_model, ValidationError,
    ValidationImportOptions, ValidationReport, ValidationTable,
};
