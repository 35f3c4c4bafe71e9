//! Core types and the heuristic traits driven by the switcher.

use super::config::{PenaltyParams, PromisingParams, WeightSmoothing};
use rand::Rng;

/// The heuristic family chosen for one step.
///
/// This is a per-step classification, not a mode: the next step's choice is
/// re-derived from fresh statistics and never depends on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveStrategy {
    /// Variable-weighting heuristic.
    WeightDriven,
    /// Clause-penalty (annealing-style) heuristic.
    PenaltyDriven,
    /// Promising-variable (non-weighting) heuristic.
    PromisingVariableDriven,
}

impl ActiveStrategy {
    /// All strategies in priority order.
    pub const ALL: [ActiveStrategy; 3] = [
        ActiveStrategy::WeightDriven,
        ActiveStrategy::PenaltyDriven,
        ActiveStrategy::PromisingVariableDriven,
    ];

    /// Short name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            ActiveStrategy::WeightDriven => "weight",
            ActiveStrategy::PenaltyDriven => "penalty",
            ActiveStrategy::PromisingVariableDriven => "promising",
        }
    }
}

/// Snapshot of the aggregate search statistics read once per step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStatistics {
    /// Largest per-variable weight.
    pub max_weight: f64,

    /// Mean per-variable weight.
    pub mean_weight: f64,

    /// Sum of all constraint penalties.
    pub total_penalty: f64,

    /// Largest constraint penalty.
    pub max_penalty: f64,

    /// Number of constraints in the instance.
    pub constraint_count: usize,
}

impl RunStatistics {
    /// Mean constraint penalty, or `None` for an instance without
    /// constraints.
    pub fn mean_penalty(&self) -> Option<f64> {
        if self.constraint_count == 0 {
            None
        } else {
            Some(self.total_penalty / self.constraint_count as f64)
        }
    }
}

/// Variable-weighting heuristic.
///
/// Implementations own their auxiliary state (weight history, smoothing
/// schedule) and expose the current per-variable weights from which the
/// switcher derives its weight statistics.
pub trait WeightHeuristic<S> {
    /// Resets all auxiliary state for a new run.
    fn reset(&mut self, state: &S, smoothing: WeightSmoothing);

    /// Picks and applies one move.
    ///
    /// Returns the flipped variable, or `None` when no move was made.
    fn execute<R: Rng>(&mut self, state: &mut S, rng: &mut R) -> Option<usize>;

    /// Current per-variable weights.
    fn variable_weights(&self) -> &[f64];

    /// Post-step refresh of the auxiliary state.
    ///
    /// Called after every effective step, whichever heuristic made it.
    fn update_aux_state(&mut self, state: &S);
}

/// Clause-penalty heuristic.
pub trait PenaltyHeuristic<S> {
    /// Resets all auxiliary state for a new run.
    fn reset(&mut self, state: &S, params: &PenaltyParams);

    /// Picks and applies one move.
    ///
    /// Returns the flipped variable, or `None` when no move was made.
    fn execute<R: Rng>(&mut self, state: &mut S, rng: &mut R) -> Option<usize>;

    /// Sum of all constraint penalties.
    fn total_penalty(&self) -> f64;

    /// Largest constraint penalty.
    fn max_penalty(&self) -> f64;

    /// Number of constraints.
    fn constraint_count(&self) -> usize;

    /// Penalty scaling and smoothing bookkeeping.
    ///
    /// Only called after effective steps made by this heuristic.
    fn post_step_update(&mut self, state: &S);
}

/// Promising-variable heuristic.
pub trait PromisingHeuristic<S> {
    /// Resets all auxiliary state for a new run.
    fn reset(&mut self, state: &S, params: &PromisingParams);

    /// Picks and applies one move.
    ///
    /// Returns the flipped variable, or `None` when no move was made.
    fn execute<R: Rng>(&mut self, state: &mut S, rng: &mut R) -> Option<usize>;

    /// Adapts the internal noise parameter.
    ///
    /// Called after every effective step, whichever heuristic made it.
    fn adapt_noise(&mut self, state: &S);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_penalty() {
        let stats = RunStatistics {
            total_penalty: 50.0,
            constraint_count: 10,
            ..Default::default()
        };
        assert_eq!(stats.mean_penalty(), Some(5.0));
    }

    #[test]
    fn test_mean_penalty_without_constraints() {
        let stats = RunStatistics {
            total_penalty: 50.0,
            ..Default::default()
        };
        assert_eq!(stats.mean_penalty(), None);
    }

    #[test]
    fn test_strategy_names_unique() {
        let names: std::collections::HashSet<_> =
            ActiveStrategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 3);
    }
}
