use ordered_float::OrderedFloat;

use crate::core::{
    AggregationMode, ChartPath, LineGeometry, PathPoint, PresentationLine, SmoothingFilter,
    SmoothingTuning, build_percentage_geometry, build_plain_geometry,
};
use crate::error::{ChartError, ChartResult};

/// Geometry strategy selected from the chart aggregation mode.
///
/// Both strategies are pure: they read the current lines (including the
/// geometry of the previous pass) and return a complete replacement snapshot,
/// one `LineGeometry` per line in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathBuilder {
    Plain,
    Percentage,
}

impl PathBuilder {
    pub fn for_mode(mode: AggregationMode) -> ChartResult<Self> {
        match mode {
            AggregationMode::Plain => Ok(Self::Plain),
            AggregationMode::Percentage => Ok(Self::Percentage),
            AggregationMode::YScaled | AggregationMode::Stacked => {
                Err(ChartError::UnsupportedAggregationMode(mode))
            }
        }
    }

    #[must_use]
    pub fn build(self, lines: &[PresentationLine], tuning: SmoothingTuning) -> Vec<LineGeometry> {
        match self {
            Self::Plain => build_plain_geometry(lines, tuning),
            Self::Percentage => build_percentage_geometry(lines, tuning),
        }
    }
}

/// `(min, max)` of `values`, `None` when empty.
pub(crate) fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().map(OrderedFloat).min()?;
    let max = values.iter().copied().map(OrderedFloat).max()?;
    Some((min.0, max.0))
}

fn shifted_points(values: &[f64], min_y: f64) -> impl Iterator<Item = PathPoint> + '_ {
    values
        .iter()
        .enumerate()
        .map(move |(index, value)| PathPoint::new(index as f64, value - min_y))
}

/// Every `step`-th value shifted by `min_y` and smoothed in sequence.
fn preview_points(values: &[f64], min_y: f64, tuning: SmoothingTuning) -> Vec<PathPoint> {
    let step = tuning.preview_step.max(1);
    let smoothed = SmoothingFilter::smooth(
        values.iter().step_by(step).map(|value| value - min_y),
        tuning.preview_factor,
    );
    smoothed
        .into_iter()
        .enumerate()
        .map(|(index, y)| PathPoint::new((index * step) as f64, y))
        .collect()
}

pub(crate) fn line_path(values: &[f64], min_y: f64) -> ChartPath {
    ChartPath::polyline(shifted_points(values, min_y))
}

pub(crate) fn line_preview_path(values: &[f64], min_y: f64, tuning: SmoothingTuning) -> ChartPath {
    ChartPath::polyline(preview_points(values, min_y, tuning))
}

pub(crate) fn filled_path(values: &[f64], min_y: f64) -> ChartPath {
    ChartPath::filled(shifted_points(values, min_y), values.len() as f64)
}

pub(crate) fn filled_preview_path(
    values: &[f64],
    min_y: f64,
    tuning: SmoothingTuning,
) -> ChartPath {
    let step = tuning.preview_step.max(1);
    let points = preview_points(values, min_y, tuning);
    let end_x = (points.len() * step) as f64;
    ChartPath::filled(points, end_x)
}
