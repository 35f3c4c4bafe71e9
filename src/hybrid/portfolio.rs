//! The three heuristics and their shared bookkeeping.

use super::config::HybridConfig;
use super::stats::WeightStatistics;
use super::types::{
    ActiveStrategy, PenaltyHeuristic, PromisingHeuristic, RunStatistics, WeightHeuristic,
};
use rand::Rng;

/// Owns the three candidate heuristics plus the weight statistics they
/// share, and keeps all of them in step.
///
/// Every effective step refreshes the weight statistics, the weight
/// heuristic's auxiliary state and the promising heuristic's noise, so a
/// heuristic that sat idle for many steps can be switched in with current
/// state. The penalty heuristic's post-step bookkeeping is the exception: it
/// only advances on steps the penalty heuristic made itself.
///
/// Outside the crate the portfolio is read-only, reached through
/// [`HybridSearch::portfolio`](super::HybridSearch::portfolio); all mutation
/// goes through the run context's `init_run` and `step`.
///
/// ```compile_fail
/// use u_hybridsls::hybrid::HybridPortfolio;
///
/// // Portfolios are only built by `HybridSearch::new`.
/// let portfolio: HybridPortfolio<(), (), ()> = HybridPortfolio::new((), (), ());
/// ```
#[derive(Debug, Clone)]
pub struct HybridPortfolio<W, P, V> {
    weight: W,
    penalty: P,
    promising: V,
    weight_stats: WeightStatistics,
}

impl<W, P, V> HybridPortfolio<W, P, V> {
    pub(crate) fn new(weight: W, penalty: P, promising: V) -> Self {
        Self {
            weight,
            penalty,
            promising,
            weight_stats: WeightStatistics::new(),
        }
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn penalty(&self) -> &P {
        &self.penalty
    }

    pub fn promising(&self) -> &V {
        &self.promising
    }

    pub fn weight_stats(&self) -> &WeightStatistics {
        &self.weight_stats
    }

    #[cfg(test)]
    pub(crate) fn weight_mut(&mut self) -> &mut W {
        &mut self.weight
    }

    #[cfg(test)]
    pub(crate) fn penalty_mut(&mut self) -> &mut P {
        &mut self.penalty
    }

    /// Consumes the portfolio, returning the heuristics.
    pub(crate) fn into_parts(self) -> (W, P, V) {
        (self.weight, self.penalty, self.promising)
    }

    /// Resets the shared statistics and every heuristic for a new run.
    pub(crate) fn reset<S>(&mut self, state: &S, config: &HybridConfig)
    where
        W: WeightHeuristic<S>,
        P: PenaltyHeuristic<S>,
        V: PromisingHeuristic<S>,
    {
        self.weight_stats.reset();
        self.weight.reset(state, config.weight_smoothing);
        self.penalty.reset(state, &config.penalty_params());
        self.promising.reset(state, &config.promising_params());
    }

    /// Consistent snapshot of the statistics the switching rule reads.
    pub fn snapshot<S>(&self) -> RunStatistics
    where
        P: PenaltyHeuristic<S>,
    {
        RunStatistics {
            max_weight: self.weight_stats.max(),
            mean_weight: self.weight_stats.mean(),
            total_penalty: self.penalty.total_penalty(),
            max_penalty: self.penalty.max_penalty(),
            constraint_count: self.penalty.constraint_count(),
        }
    }

    /// Runs the chosen heuristic for one move.
    pub(crate) fn execute<S, R>(
        &mut self,
        active: ActiveStrategy,
        state: &mut S,
        rng: &mut R,
    ) -> Option<usize>
    where
        W: WeightHeuristic<S>,
        P: PenaltyHeuristic<S>,
        V: PromisingHeuristic<S>,
        R: Rng,
    {
        match active {
            ActiveStrategy::WeightDriven => self.weight.execute(state, rng),
            ActiveStrategy::PenaltyDriven => self.penalty.execute(state, rng),
            ActiveStrategy::PromisingVariableDriven => self.promising.execute(state, rng),
        }
    }

    /// Post-step synchronization.
    ///
    /// Steps that moved nothing leave every piece of state untouched.
    pub(crate) fn after_step<S>(
        &mut self,
        move_was_effective: bool,
        active: ActiveStrategy,
        state: &S,
    )
    where
        W: WeightHeuristic<S>,
        P: PenaltyHeuristic<S>,
        V: PromisingHeuristic<S>,
    {
        if !move_was_effective {
            return;
        }

        self.weight_stats.refresh(self.weight.variable_weights());
        self.weight.update_aux_state(state);
        self.promising.adapt_noise(state);

        if active == ActiveStrategy::PenaltyDriven {
            self.penalty.post_step_update(state);
        }
    }
}
