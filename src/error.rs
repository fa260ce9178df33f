use thiserror::Error;

use crate::core::AggregationMode;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart data must contain at least one line")]
    EmptyChartData,

    #[error("chart data must contain at least one x-axis sample")]
    EmptySeries,

    #[error("line {line} has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line index {index} out of range (lines: {count})")]
    LineIndexOutOfRange { index: usize, count: usize },

    #[error("fractional index {index} out of range [0, {max}]")]
    FractionalIndexOutOfRange { index: f64, max: f64 },

    #[error("aggregation mode {0:?} has no path builder")]
    UnsupportedAggregationMode(AggregationMode),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
