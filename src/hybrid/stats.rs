//! Shared weight statistics.

/// Maximum and mean of the per-variable weights.
///
/// Shared by all three heuristics: the switcher refreshes it after every
/// effective step so the weight check sees current values even while the
/// weight-driven heuristic is dormant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightStatistics {
    max: f64,
    mean: f64,
}

impl WeightStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest weight seen at the last refresh.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Mean weight at the last refresh.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Clears both scalars.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recomputes both scalars from the current weights.
    ///
    /// An empty slice resets the statistics.
    pub fn refresh(&mut self, weights: &[f64]) {
        if weights.is_empty() {
            self.reset();
            return;
        }
        let (sum, max) = weights
            .iter()
            .fold((0.0, f64::NEG_INFINITY), |(sum, max), &w| (sum + w, max.max(w)));
        self.max = max;
        self.mean = sum / weights.len() as f64;
    }
}
