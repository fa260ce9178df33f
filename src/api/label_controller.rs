use crate::error::{ChartError, ChartResult};

use super::PresentationData;

/// Bracketing sample indices for a fractional index plus the weight of the upper one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SampleBracket {
    pub lower: usize,
    pub upper: usize,
    pub weight: f64,
}

impl SampleBracket {
    pub fn interpolate(self, values: &[f64]) -> Option<f64> {
        let v1 = *values.get(self.lower)?;
        let v2 = *values.get(self.upper)?;
        Some(v1 + (v2 - v1) * self.weight)
    }
}

impl PresentationData {
    /// One formatted label per x-axis sample.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Formats the x-axis position interpolated at `fractional_index`.
    ///
    /// Valid indices are finite and within `[0, points_count - 1]`.
    pub fn label_at(&self, fractional_index: f64) -> ChartResult<String> {
        let bracket = self.sample_bracket(fractional_index)?;
        let position = bracket
            .interpolate(&self.x_axis_positions)
            .ok_or_else(|| self.fractional_index_error(fractional_index))?;
        Ok(self.formatter.format(position))
    }

    pub(super) fn sample_bracket(&self, fractional_index: f64) -> ChartResult<SampleBracket> {
        let max = self.points_count().saturating_sub(1) as f64;
        if !fractional_index.is_finite() || fractional_index < 0.0 || fractional_index > max {
            return Err(self.fractional_index_error(fractional_index));
        }
        Ok(SampleBracket {
            lower: fractional_index.floor() as usize,
            upper: fractional_index.ceil() as usize,
            weight: fractional_index.fract(),
        })
    }

    fn fractional_index_error(&self, index: f64) -> ChartError {
        ChartError::FractionalIndexOutOfRange {
            index,
            max: self.points_count().saturating_sub(1) as f64,
        }
    }
}
