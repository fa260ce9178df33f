use std::rc::Rc;

use tracing::warn;

use crate::core::path_builder::{filled_path, filled_preview_path};
use crate::core::{LineGeometry, PresentationLine, SmoothingTuning};

/// Stacks visible lines into cumulative 100% bands, bottom to top in declared
/// order.
///
/// A hidden line reuses the band of the nearest visible line below it, so it
/// collapses to zero width. A hidden line with nothing visible below it keeps
/// its previous geometry flattened onto the baseline.
///
/// A sample where the visible values sum to zero contributes 0% for every
/// line, so the cumulative value stays where it was.
#[must_use]
pub fn build_percentage_geometry(
    lines: &[PresentationLine],
    tuning: SmoothingTuning,
) -> Vec<LineGeometry> {
    let visible: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_visible())
        .map(|(index, _)| index)
        .collect();
    let points_count = visible.first().map_or(0, |&index| lines[index].values().len());

    let mut aggregated: Vec<Vec<f64>> = vec![Vec::new(); lines.len()];
    let mut max_y = vec![f64::MIN; lines.len()];
    for &index in &visible {
        aggregated[index].reserve_exact(points_count);
    }

    let mut zero_sum_samples = 0usize;
    for sample in 0..points_count {
        let sum: f64 = visible
            .iter()
            .map(|&index| lines[index].values()[sample])
            .sum();
        if sum == 0.0 {
            zero_sum_samples += 1;
        }

        let mut cumulative = 0.0;
        for &index in &visible {
            if sum != 0.0 {
                cumulative += lines[index].values()[sample] / sum * 100.0;
            }
            aggregated[index].push(cumulative);
            max_y[index] = max_y[index].max(cumulative.round());
        }
    }
    if zero_sum_samples > 0 {
        warn!(
            zero_sum_samples,
            "visible lines sum to zero; treating those samples as 0%"
        );
    }

    let mut geometry: Vec<LineGeometry> = Vec::with_capacity(lines.len());
    let mut previous_visible: Option<usize> = None;
    for (index, line) in lines.iter().enumerate() {
        if line.is_visible() {
            let values = std::mem::take(&mut aggregated[index]);
            geometry.push(LineGeometry {
                min_y: 0.0,
                max_y: max_y[index],
                path: Rc::new(filled_path(&values, 0.0)),
                preview_path: Rc::new(filled_preview_path(&values, 0.0, tuning)),
                aggregated_values: values,
            });
            previous_visible = Some(index);
            continue;
        }

        let (path, preview_path) = match previous_visible {
            Some(below) => (
                Rc::clone(&geometry[below].path),
                Rc::clone(&geometry[below].preview_path),
            ),
            None => (
                Rc::new(line.path().scaled_y(0.0)),
                Rc::new(line.preview_path().scaled_y(0.0)),
            ),
        };
        geometry.push(LineGeometry {
            aggregated_values: Vec::new(),
            min_y: line.min_y(),
            max_y: line.max_y(),
            path,
            preview_path,
        });
    }
    geometry
}
