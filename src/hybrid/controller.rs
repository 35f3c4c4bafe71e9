//! Switching rule.

use super::config::HybridConfig;
use super::error::HybridError;
use super::types::{ActiveStrategy, RunStatistics};

/// Chooses the heuristic family for the current step.
///
/// The checks run in fixed priority order with inclusive comparisons, so a
/// snapshot sitting exactly on a threshold goes to the earlier family:
///
/// 1. `max_weight >= gamma * mean_weight` selects [`ActiveStrategy::WeightDriven`];
/// 2. `mean_penalty <= pi` or `max_penalty >= delta * mean_penalty` selects
///    [`ActiveStrategy::PenaltyDriven`];
/// 3. anything else selects [`ActiveStrategy::PromisingVariableDriven`].
///
/// The result depends only on the arguments.
///
/// # Errors
///
/// [`HybridError::DegenerateInput`] when `stats.constraint_count` is zero.
///
/// # Examples
///
/// ```
/// use u_hybridsls::hybrid::{select_strategy, ActiveStrategy, HybridConfig, RunStatistics};
///
/// let stats = RunStatistics {
///     max_weight: 5.0,
///     mean_weight: 1.0,
///     total_penalty: 50.0,
///     max_penalty: 20.0,
///     constraint_count: 10,
/// };
/// let choice = select_strategy(&stats, &HybridConfig::default()).unwrap();
/// assert_eq!(choice, ActiveStrategy::PenaltyDriven);
/// ```
pub fn select_strategy(
    stats: &RunStatistics,
    config: &HybridConfig,
) -> Result<ActiveStrategy, HybridError> {
    let mean_penalty = stats
        .mean_penalty()
        .ok_or(HybridError::DegenerateInput {
            constraint_count: stats.constraint_count,
        })?;

    if stats.max_weight >= config.weight_ratio_threshold * stats.mean_weight {
        return Ok(ActiveStrategy::WeightDriven);
    }
    if mean_penalty <= config.penalty_floor_threshold
        || stats.max_penalty >= config.penalty_ratio_threshold * mean_penalty
    {
        return Ok(ActiveStrategy::PenaltyDriven);
    }
    Ok(ActiveStrategy::PromisingVariableDriven)
}
