use std::rc::Rc;

use crate::core::path_builder::{
    filled_path, filled_preview_path, line_path, line_preview_path, value_bounds,
};
use crate::core::{LineGeometry, LineKind, PresentationLine, SmoothingTuning};

/// Builds every line independently, visible or not.
///
/// `LineArea` lines are filled against a fixed zero baseline. All other kinds
/// become polylines shifted so the line's own minimum sits at zero.
#[must_use]
pub fn build_plain_geometry(lines: &[PresentationLine], tuning: SmoothingTuning) -> Vec<LineGeometry> {
    lines.iter().map(|line| build_line(line, tuning)).collect()
}

fn build_line(line: &PresentationLine, tuning: SmoothingTuning) -> LineGeometry {
    let values = line.values();
    let (min_value, max_value) = value_bounds(values).unwrap_or((0.0, 0.0));

    if line.kind() == LineKind::LineArea {
        return LineGeometry {
            aggregated_values: values.to_vec(),
            min_y: 0.0,
            max_y: max_value,
            path: Rc::new(filled_path(values, 0.0)),
            preview_path: Rc::new(filled_preview_path(values, 0.0, tuning)),
        };
    }

    LineGeometry {
        aggregated_values: values.to_vec(),
        min_y: min_value,
        max_y: max_value,
        path: Rc::new(line_path(values, min_value)),
        preview_path: Rc::new(line_preview_path(values, min_value, tuning)),
    }
}
