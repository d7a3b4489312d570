//! 바이오매스 연소로 모델을 라이브러리로 분리하여 CLI 외의 호출자(실행이력 저장소,
//! 그래프 화면 등)도 같은 순수 함수를 그대로 쓸 수 있게 한다.

pub mod analysis;
pub mod app;
pub mod combustion;
pub mod config;
pub mod run;
pub mod ui_cli;
pub mod units;

pub use combustion::{evaluate, FuelComposition, OperatingInputs, SimulationResult};
