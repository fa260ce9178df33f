use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// How a single series is meant to be drawn.
///
/// Only `LineArea` changes geometry: it is built as a filled polygon against
/// a zero baseline. The other kinds produce an open polyline and are passed
/// through for legend/rendering consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    #[default]
    Line,
    Bar,
    Area,
    LineArea,
}

/// How series are combined on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AggregationMode {
    /// Every series keeps its own values and its own baseline.
    #[default]
    Plain,
    /// Declared for data compatibility; no path builder exists.
    YScaled,
    /// Declared for data compatibility; no path builder exists.
    Stacked,
    /// Visible series are stacked into 100% bands.
    Percentage,
}

/// One named sequence of samples as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    pub name: String,
    pub color: Color,
    #[serde(default)]
    pub kind: LineKind,
    pub values: Vec<i64>,
}

impl RawSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, kind: LineKind, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            color,
            kind,
            values,
        }
    }
}

/// Read-only chart input: x-axis sample positions plus one or more series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub x_axis_positions: Vec<f64>,
    pub lines: Vec<RawSeries>,
    #[serde(default)]
    pub aggregation_mode: AggregationMode,
}

impl ChartData {
    /// Builds and validates chart data.
    pub fn new(
        x_axis_positions: Vec<f64>,
        lines: Vec<RawSeries>,
        aggregation_mode: AggregationMode,
    ) -> ChartResult<Self> {
        let data = Self {
            x_axis_positions,
            lines,
            aggregation_mode,
        };
        data.validate()?;
        Ok(data)
    }

    /// Parses chart data from JSON and validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let data: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the structural invariants the presentation layer relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if self.lines.is_empty() {
            return Err(ChartError::EmptyChartData);
        }
        if self.x_axis_positions.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if self.x_axis_positions.iter().any(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData(
                "x-axis positions must be finite".to_owned(),
            ));
        }
        if self.x_axis_positions.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ChartError::InvalidData(
                "x-axis positions must be non-decreasing".to_owned(),
            ));
        }

        let expected = self.x_axis_positions.len();
        for (line, series) in self.lines.iter().enumerate() {
            if series.values.len() != expected {
                return Err(ChartError::SeriesLengthMismatch {
                    line,
                    expected,
                    actual: series.values.len(),
                });
            }
            series.color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn points_count(&self) -> usize {
        self.x_axis_positions.len()
    }
}
