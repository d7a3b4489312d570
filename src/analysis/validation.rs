//! 실측 (과잉공기, 효율) 데이터와 모델 효율을 비교한다.
//!
//! 입력은 구분자로 나뉜 표 형식 텍스트(CSV 규칙, 따옴표 셀 허용)이며 첫 줄이 헤더다.
//! 헤더에서 x/y 열 이름을 찾고, 수치가 아닌 행은 건너뛴다.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combustion::{evaluate, FuelComposition, OperatingInputs};

/// 검증 데이터 가져오기 오류.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("검증 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("검증 표 읽기 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("검증 데이터가 비어 있음")]
    EmptyTable,
    #[error("헤더에서 '{0}' 열을 찾을 수 없음")]
    MissingColumn(String),
    #[error("구분자는 ASCII 문자여야 함: {0:?}")]
    InvalidDelimiter(char),
}

/// 열 이름과 구분자 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationImportOptions {
    /// 과잉공기 [%] 열 이름
    pub x_column: String,
    /// 실측 효율 [%] 열 이름
    pub y_column: String,
    pub delimiter: char,
}

impl Default for ValidationImportOptions {
    fn default() -> Self {
        Self {
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            delimiter: ',',
        }
    }
}

/// 실측 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredPoint {
    pub excess_air_percent: f64,
    pub measured_efficiency_percent: f64,
}

/// 파싱된 검증 표.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationTable {
    pub rows: Vec<MeasuredPoint>,
    /// 수치가 아니거나 열이 모자라 버린 행 수
    pub skipped_rows: usize,
}

/// 실측값과 같은 과잉공기에서의 모델 효율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationPoint {
    pub excess_air_percent: f64,
    pub measured_efficiency_percent: f64,
    pub model_efficiency_percent: f64,
}

impl ValidationPoint {
    /// 모델 - 실측 [%p]
    pub fn error(&self) -> f64 {
        self.model_efficiency_percent - self.measured_efficiency_percent
    }
}

/// 오차 요약 [%p].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub mean_abs_error: f64,
    pub rmse: f64,
    pub max_abs_error: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub points: Vec<ValidationPoint>,
    pub skipped_rows: usize,
    /// 비교할 점이 없으면 `None`
    pub summary: Option<ValidationSummary>,
}

fn clean_cell(cell: &str) -> &str {
    cell.trim_start_matches('\u{feff}')
        .trim()
        .trim_matches('"')
        .trim()
}

fn parse_number(cell: Option<&str>) -> Option<f64> {
    let v: f64 = clean_cell(cell?).parse().ok()?;
    v.is_finite().then_some(v)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|c| c.is_empty())
}

/// 표 텍스트에서 x/y 열을 읽는다. 수치가 아닌 행은 실패 없이 건너뛴다.
pub fn parse_validation_table(
    text: &str,
    options: &ValidationImportOptions,
) -> Result<ValidationTable, ValidationError> {
    if !options.delimiter.is_ascii() {
        return Err(ValidationError::InvalidDelimiter(options.delimiter));
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter as u8)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if is_blank(&header) {
        return Err(ValidationError::EmptyTable);
    }
    let find = |name: &str| {
        header
            .iter()
            .position(|c| clean_cell(c).eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ValidationError::MissingColumn(name.to_string()))
    };
    let x_idx = find(options.x_column.as_str())?;
    let y_idx = find(options.y_column.as_str())?;

    let mut table = ValidationTable::default();
    for record in reader.records() {
        let Ok(record) = record else {
            table.skipped_rows += 1;
            continue;
        };
        if is_blank(&record) {
            continue;
        }
        let x = parse_number(record.get(x_idx));
        let y = parse_number(record.get(y_idx));
        match (x, y) {
            (Some(x), Some(y)) => table.rows.push(MeasuredPoint {
                excess_air_percent: x,
                measured_efficiency_percent: y,
            }),
            _ => table.skipped_rows += 1,
        }
    }
    Ok(table)
}

/// 각 실측 행의 과잉공기로 모델을 한 번씩 평가한다. 나머지 운전 조건은 `base`를 따른다.
pub fn validate_against_model(
    fuel: &FuelComposition,
    base: OperatingInputs,
    table: &ValidationTable,
) -> ValidationReport {
    let points: Vec<ValidationPoint> = table
        .rows
        .iter()
        .map(|row| {
            let result = evaluate(fuel, base.with_excess_air(row.excess_air_percent));
            ValidationPoint {
                excess_air_percent: row.excess_air_percent,
                measured_efficiency_percent: row.measured_efficiency_percent,
                model_efficiency_percent: result.efficiency_percent,
            }
        })
        .collect();
    let summary = summarize(&points);
    ValidationReport {
        points,
        skipped_rows: table.skipped_rows,
        summary,
    }
}

/// 평균 절대오차, RMSE, 최대 절대오차.
pub fn summarize(points: &[ValidationPoint]) -> Option<ValidationSummary> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut max_abs: f64 = 0.0;
    for p in points {
        let e = p.error();
        abs_sum += e.abs();
        sq_sum += e * e;
        max_abs = max_abs.max(e.abs());
    }
    Some(ValidationSummary {
        mean_abs_error: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        max_abs_error: max_abs,
    })
}

/// 파일을 읽어 모델과 비교한다.
pub fn import_validation_file(
    path: &Path,
    fuel: &FuelComposition,
    base: OperatingInputs,
    options: &ValidationImportOptions,
) -> Result<ValidationReport, ValidationError> {
    let content = fs::read_to_string(path)?;
    let table = parse_validation_table(&content, options)?;
    Ok(validate_against_model(fuel, base, &table))
}
