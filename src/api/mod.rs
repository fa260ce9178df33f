mod label_controller;
mod point_info;
mod presentation_config;
mod presentation_snapshot;
mod value_formatter;
mod visibility_controller;

pub use point_info::{LineInfo, PointInfo};
pub use presentation_config::PresentationConfig;
pub use presentation_snapshot::{
    LineSnapshot, PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1, PresentationSnapshot,
    PresentationSnapshotJsonContractV1,
};
pub use value_formatter::ValueFormatter;
pub use visibility_controller::VisibilityListener;

use std::rc::Weak;

use tracing::debug;

use crate::core::{AggregationMode, ChartData, PathBuilder, PresentationLine};
use crate::error::{ChartError, ChartResult};

/// Presentation state for one chart: per-line geometry, labels and global
/// vertical bounds, kept consistent with the current line visibility.
///
/// Every mutation recomputes all derived state before returning, so callers
/// never observe a partially rebuilt chart.
pub struct PresentationData {
    x_axis_positions: Vec<f64>,
    aggregation_mode: AggregationMode,
    path_builder: PathBuilder,
    config: PresentationConfig,
    formatter: Box<dyn ValueFormatter>,
    lines: Vec<PresentationLine>,
    labels: Vec<String>,
    lower: f64,
    upper: f64,
    listener: Option<Weak<dyn VisibilityListener>>,
}

impl PresentationData {
    /// Builds presentation state with default config (no smoothing).
    pub fn new(
        chart_data: ChartData,
        formatter: impl ValueFormatter + 'static,
    ) -> ChartResult<Self> {
        Self::with_config(chart_data, formatter, PresentationConfig::default())
    }

    pub fn with_config(
        chart_data: ChartData,
        formatter: impl ValueFormatter + 'static,
        config: PresentationConfig,
    ) -> ChartResult<Self> {
        chart_data.validate()?;
        let config = config.validate()?;
        let path_builder = PathBuilder::for_mode(chart_data.aggregation_mode)?;

        let ChartData {
            x_axis_positions,
            lines,
            aggregation_mode,
        } = chart_data;
        let smoothing_factor = config.series_smoothing_factor();
        let lines: Vec<PresentationLine> = lines
            .into_iter()
            .map(|series| PresentationLine::new(series, smoothing_factor))
            .collect();
        let labels = x_axis_positions
            .iter()
            .map(|&position| formatter.format(position))
            .collect();

        debug!(
            lines = lines.len(),
            points = x_axis_positions.len(),
            mode = ?aggregation_mode,
            smoothing = config.smoothing,
            "create presentation data"
        );

        let mut data = Self {
            x_axis_positions,
            aggregation_mode,
            path_builder,
            config,
            formatter: Box::new(formatter),
            lines,
            labels,
            lower: f64::INFINITY,
            upper: f64::NEG_INFINITY,
            listener: None,
        };
        data.recalculate_bounds();
        Ok(data)
    }

    #[must_use]
    pub fn lines_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn points_count(&self) -> usize {
        self.x_axis_positions.len()
    }

    #[must_use]
    pub fn aggregation_mode(&self) -> AggregationMode {
        self.aggregation_mode
    }

    #[must_use]
    pub fn config(&self) -> PresentationConfig {
        self.config
    }

    #[must_use]
    pub fn x_axis_positions(&self) -> &[f64] {
        &self.x_axis_positions
    }

    /// Lowest `min_y` across visible lines.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Highest `max_y` across visible lines.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn line_at(&self, index: usize) -> ChartResult<&PresentationLine> {
        self.lines.get(index).ok_or(ChartError::LineIndexOutOfRange {
            index,
            count: self.lines.len(),
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &PresentationLine> {
        self.lines.iter()
    }

    /// Rebuilds every line's geometry and the global bounds in one pass.
    fn recalculate_bounds(&mut self) {
        let geometry = self.path_builder.build(&self.lines, self.config.tuning);
        for (line, geometry) in self.lines.iter_mut().zip(geometry) {
            line.replace_geometry(geometry);
        }

        let (lower, upper) = self
            .lines
            .iter()
            .filter(|line| line.is_visible())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lower, upper), line| {
                (lower.min(line.min_y()), upper.max(line.max_y()))
            });
        self.lower = lower;
        self.upper = upper;
        debug!(lower, upper, visible = self.visible_count(), "recalculate bounds");
    }
}
