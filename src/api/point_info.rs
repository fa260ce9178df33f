use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, PathPoint};
use crate::error::ChartResult;

use super::PresentationData;

/// Readout for one visible line at a crosshair position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInfo {
    pub line_index: usize,
    pub name: String,
    pub color: Color,
    /// Position in the same space as the line's path.
    pub point: PathPoint,
    pub formatted_value: String,
}

/// Everything an info overlay needs for one x position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointInfo {
    pub label: String,
    pub lines: SmallVec<[LineInfo; 4]>,
}

impl PresentationData {
    /// Collects the x label and per-line readouts at `fractional_index`.
    ///
    /// Only visible lines are reported, in declared order. Each `point.y` is
    /// the aggregated value interpolated at the index, shifted by the line's
    /// `min_y`; the formatted value uses the raw sample nearest the index.
    pub fn point_info(&self, fractional_index: f64) -> ChartResult<PointInfo> {
        let label = self.label_at(fractional_index)?;
        let bracket = self.sample_bracket(fractional_index)?;
        let nearest = fractional_index.round() as usize;

        let lines = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_visible())
            .map(|(line_index, line)| {
                let y = bracket
                    .interpolate(line.aggregated_values())
                    .unwrap_or(line.min_y())
                    - line.min_y();
                let formatted_value = line
                    .raw_values()
                    .get(nearest)
                    .map(|&value| self.formatter.format_sample(value))
                    .unwrap_or_default();
                LineInfo {
                    line_index,
                    name: line.name().to_owned(),
                    color: line.color(),
                    point: PathPoint::new(fractional_index, y),
                    formatted_value,
                }
            })
            .collect();

        Ok(PointInfo { label, lines })
    }
}
