use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Single-pole exponential moving-average smoother.
///
/// `factor` is the weight kept from the current value; each update blends in
/// `1 - factor` of the new sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingFilter {
    value: f64,
    factor: f64,
}

impl SmoothingFilter {
    #[must_use]
    pub const fn new(value: f64, factor: f64) -> Self {
        Self { value, factor }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Blends `new_value` into the running value and returns the result.
    pub fn update(&mut self, new_value: f64) -> f64 {
        self.value = self.factor * self.value + (1.0 - self.factor) * new_value;
        self.value
    }

    /// Runs a freshly seeded filter over `samples`, seeding with the first one.
    #[must_use]
    pub fn smooth(samples: impl IntoIterator<Item = f64>, factor: f64) -> Vec<f64> {
        let mut samples = samples.into_iter().peekable();
        let Some(&seed) = samples.peek() else {
            return Vec::new();
        };
        let mut filter = Self::new(seed, factor);
        samples.map(|sample| filter.update(sample)).collect()
    }
}

/// Blend factors and down-sampling used when smoothing series and previews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingTuning {
    /// Factor for optional full-series smoothing.
    pub series_factor: f64,
    /// Factor for preview-path smoothing.
    pub preview_factor: f64,
    /// Every `preview_step`-th sample feeds the preview path.
    pub preview_step: usize,
}

impl Default for SmoothingTuning {
    fn default() -> Self {
        Self {
            series_factor: 0.8,
            preview_factor: 0.3,
            preview_step: 5,
        }
    }
}

impl SmoothingTuning {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, factor) in [
            ("series_factor", self.series_factor),
            ("preview_factor", self.preview_factor),
        ] {
            if !factor.is_finite() || !(0.0..=1.0).contains(&factor) {
                return Err(ChartError::InvalidData(format!(
                    "smoothing `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if self.preview_step == 0 {
            return Err(ChartError::InvalidData(
                "preview step must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}
