//! 바이오매스 연소로 모델 모음.
//! 물질수지 -> 에너지수지 -> 효율 -> 비용 -> 배출 순으로 계산한다.

pub mod constants;
pub mod cost;
pub mod efficiency;
pub mod emissions;
pub mod energy_balance;
pub mod fuel;
pub mod fuel_catalog;
pub mod mass_balance;
pub mod model;
pub mod reference_curve;

pub use fuel::{FuelComposition, OperatingInputs, UltimateAnalysis};
pub use fuel_catalog::{CatalogError, FuelCatalog};
pub use model::{evaluate, CombustionBalance, ModelFallback, SimulationResult};
pub use reference_curve::{ReferenceCurve, REFERENCE_CURVE};
