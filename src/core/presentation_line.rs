use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{ChartPath, Color, LineKind, RawSeries, SmoothingFilter};

/// Derived per-line state produced by one path-builder pass.
///
/// `path`/`preview_path` are reference counted so a collapsed stacked band
/// can share the exact geometry of the band below it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGeometry {
    pub aggregated_values: Vec<f64>,
    pub min_y: f64,
    pub max_y: f64,
    pub path: Rc<ChartPath>,
    pub preview_path: Rc<ChartPath>,
}

/// One raw series plus the state the presentation layer derives from it.
#[derive(Debug, Clone)]
pub struct PresentationLine {
    series: RawSeries,
    values: Vec<f64>,
    visible: bool,
    geometry: LineGeometry,
}

impl PresentationLine {
    /// Wraps `series`; when `smoothing_factor` is set, values are run through a
    /// filter seeded with the first raw sample.
    #[must_use]
    pub fn new(series: RawSeries, smoothing_factor: Option<f64>) -> Self {
        let raw = series.values.iter().map(|&value| value as f64);
        let values = match smoothing_factor {
            Some(factor) => SmoothingFilter::smooth(raw, factor),
            None => raw.collect(),
        };
        Self {
            series,
            values,
            visible: true,
            geometry: LineGeometry::default(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn raw_values(&self) -> &[i64] {
        &self.series.values
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.series.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.series.color
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.series.kind
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn geometry(&self) -> &LineGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn aggregated_values(&self) -> &[f64] {
        &self.geometry.aggregated_values
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.geometry.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.geometry.max_y
    }

    #[must_use]
    pub fn path(&self) -> &Rc<ChartPath> {
        &self.geometry.path
    }

    #[must_use]
    pub fn preview_path(&self) -> &Rc<ChartPath> {
        &self.geometry.preview_path
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn replace_geometry(&mut self, geometry: LineGeometry) {
        self.geometry = geometry;
    }
}
