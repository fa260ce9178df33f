use serde::{Deserialize, Serialize};

use crate::core::SmoothingTuning;
use crate::error::ChartResult;

/// Construction-time options for `PresentationData`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Smooth every series with `tuning.series_factor` before building paths.
    pub smoothing: bool,
    pub tuning: SmoothingTuning,
}

impl PresentationConfig {
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: SmoothingTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.tuning.validate()?;
        Ok(self)
    }

    pub(super) fn series_smoothing_factor(self) -> Option<f64> {
        self.smoothing.then_some(self.tuning.series_factor)
    }
}
