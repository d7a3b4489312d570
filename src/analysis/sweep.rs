use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combustion::{evaluate, FuelComposition, OperatingInputs};

/// 스윕 점 개수 상한.
pub const MAX_SWEEP_STEPS: usize = 50;

/// 변화시킬 운전 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SweepVariable {
    /// 수분 [%]
    #[value(name = "moisture")]
    MoisturePercent,
    /// 과잉공기 [%]
    #[value(name = "excess-air")]
    ExcessAirPercent,
}

impl SweepVariable {
    /// 그래프 x축 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::MoisturePercent => "Moisture Content (%)",
            SweepVariable::ExcessAirPercent => "Excess Air (%)",
        }
    }
}

/// 한 변수를 고정하고 다른 변수를 선형 구간으로 변화시키는 스윕 요청.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    pub variable: SweepVariable,
    pub start: f64,
    pub end: f64,
    /// 시작/끝을 포함한 점 개수
    pub steps: usize,
    pub constant_moisture_percent: f64,
    pub constant_excess_air_percent: f64,
    pub constant_load_gj_per_hour: f64,
}

impl Default for SweepRequest {
    fn default() -> Self {
        Self {
            variable: SweepVariable::MoisturePercent,
            start: 10.0,
            end: 50.0,
            steps: 10,
            constant_moisture_percent: 10.0,
            constant_excess_air_percent: 40.0,
            constant_load_gj_per_hour: 1.0,
        }
    }
}

impl SweepRequest {
    /// 스윕 값 `x`에 해당하는 운전 조건.
    pub fn inputs_at(&self, x: f64) -> OperatingInputs {
        let base = OperatingInputs::new(
            self.constant_moisture_percent,
            self.constant_excess_air_percent,
            self.constant_load_gj_per_hour,
        );
        match self.variable {
            SweepVariable::MoisturePercent => base.with_moisture(x),
            SweepVariable::ExcessAirPercent => base.with_excess_air(x),
        }
    }
}

/// 스윕 결과. 모든 배열은 `x_values`와 같은 인덱스로 정렬된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    pub variable: SweepVariable,
    pub x_axis_label: String,
    pub x_values: Vec<f64>,
    pub efficiency_percent: Vec<f64>,
    pub cost_per_gj: Vec<f64>,
    pub co_ppm: Vec<f64>,
}

impl SweepSeries {
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

/// 스윕 요청 오류.
#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("스윕 점 개수는 2 이상이어야 함 (입력 {0})")]
    TooFewSteps(usize),
    #[error("스윕 점 개수는 {max} 이하여야 함 (입력 {steps})")]
    TooManySteps { steps: usize, max: usize },
    #[error("스윕 구간 경계가 수치가 아님: {start} ~ {end}")]
    NonFiniteBound { start: f64, end: f64 },
}

/// 시작과 끝을 포함해 `steps`개 점으로 나눈 등간격 배열.
/// 마지막 점은 정확히 `end`다.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// 스윕 점마다 모델을 한 번씩 평가해 효율, 열량 단가, CO를 모은다.
pub fn run_sweep(
    fuel: &FuelComposition,
    request: &SweepRequest,
) -> Result<SweepSeries, SweepError> {
    if request.steps < 2 {
        return Err(SweepError::TooFewSteps(request.steps));
    }
    if request.steps > MAX_SWEEP_STEPS {
        return Err(SweepError::TooManySteps {
            steps: request.steps,
            max: MAX_SWEEP_STEPS,
        });
    }
    if !request.start.is_finite() || !request.end.is_finite() {
        return Err(SweepError::NonFiniteBound {
            start: request.start,
            end: request.end,
        });
    }

    let x_values = linspace(request.start, request.end, request.steps);
    let points = evaluate_points(fuel, request, &x_values);

    let mut series = SweepSeries {
        variable: request.variable,
        x_axis_label: request.variable.label().to_string(),
        efficiency_percent: Vec::with_capacity(points.len()),
        cost_per_gj: Vec::with_capacity(points.len()),
        co_ppm: Vec::with_capacity(points.len()),
        x_values,
    };
    for (efficiency, cost, co) in points {
        series.efficiency_percent.push(efficiency);
        series.cost_per_gj.push(cost);
        series.co_ppm.push(co);
    }
    Ok(series)
}

fn evaluate_point(fuel: &FuelComposition, request: &SweepRequest, x: f64) -> (f64, f64, f64) {
    let result = evaluate(fuel, request.inputs_at(x));
    (result.efficiency_percent, result.cost_per_gj, result.co_ppm)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_points(
    fuel: &FuelComposition,
    request: &SweepRequest,
    x_values: &[f64],
) -> Vec<(f64, f64, f64)> {
    x_values
        .iter()
        .map(|&x| evaluate_point(fuel, request, x))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_points(
    fuel: &FuelComposition,
    request: &SweepRequest,
    x_values: &[f64],
) -> Vec<(f64, f64, f64)> {
    use rayon::prelude::*;
    x_values
        .par_iter()
        .map(|&x| evaluate_point(fuel, request, x))
        .collect()
}
