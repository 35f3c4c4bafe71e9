//! Per-step dispatch loop body.

use super::config::HybridConfig;
use super::controller::select_strategy;
use super::error::HybridError;
use super::portfolio::HybridPortfolio;
use super::types::{
    ActiveStrategy, PenaltyHeuristic, PromisingHeuristic, RunStatistics, WeightHeuristic,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of one [`HybridSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Heuristic chosen for the step.
    pub strategy: ActiveStrategy,

    /// Variable flipped by the heuristic, `None` for a null step.
    pub flipped: Option<usize>,

    /// Statistics the choice was made from.
    pub statistics: RunStatistics,
}

impl StepReport {
    /// Whether the step changed the search state.
    pub fn was_effective(&self) -> bool {
        self.flipped.is_some()
    }
}

/// How often each heuristic was chosen during the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrategyCounts {
    pub weight_driven: usize,
    pub penalty_driven: usize,
    pub promising_driven: usize,

    /// Steps whose heuristic made no move.
    pub null_steps: usize,
}

impl StrategyCounts {
    fn record(&mut self, strategy: ActiveStrategy, effective: bool) {
        match strategy {
            ActiveStrategy::WeightDriven => self.weight_driven += 1,
            ActiveStrategy::PenaltyDriven => self.penalty_driven += 1,
            ActiveStrategy::PromisingVariableDriven => self.promising_driven += 1,
        }
        if !effective {
            self.null_steps += 1;
        }
    }

    /// Number of steps that chose `strategy`.
    pub fn get(&self, strategy: ActiveStrategy) -> usize {
        match strategy {
            ActiveStrategy::WeightDriven => self.weight_driven,
            ActiveStrategy::PenaltyDriven => self.penalty_driven,
            ActiveStrategy::PromisingVariableDriven => self.promising_driven,
        }
    }

    /// Total number of completed steps.
    pub fn total(&self) -> usize {
        self.weight_driven + self.penalty_driven + self.promising_driven
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Run context of the hybrid switcher.
///
/// Holds the configuration, the heuristic portfolio and the random source for
/// one search run. The outer search loop calls [`init_run`](Self::init_run)
/// once and then [`step`](Self::step) until it decides to stop. Parallel
/// restarts need one context each.
///
/// # Examples
///
/// ```ignore
/// let mut search = HybridSearch::new(HybridConfig::default().with_seed(42), vw, rsaps, g2wsat)?;
/// search.init_run(&formula);
/// while !formula.is_satisfied() {
///     search.step(&mut formula)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HybridSearch<W, P, V> {
    config: HybridConfig,
    portfolio: HybridPortfolio<W, P, V>,
    rng: StdRng,
    last_active: Option<ActiveStrategy>,
    counts: StrategyCounts,
    aborted: Option<HybridError>,
}

impl<W, P, V> HybridSearch<W, P, V> {
    /// Builds a run context.
    ///
    /// # Errors
    ///
    /// [`HybridError::ConfigurationRange`] if `config` fails validation.
    pub fn new(
        config: HybridConfig,
        weight: W,
        penalty: P,
        promising: V,
    ) -> Result<Self, HybridError> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Ok(Self {
            config,
            portfolio: HybridPortfolio::new(weight, penalty, promising),
            rng,
            last_active: None,
            counts: StrategyCounts::default(),
            aborted: None,
        })
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    pub fn portfolio(&self) -> &HybridPortfolio<W, P, V> {
        &self.portfolio
    }

    /// Consumes the context, returning the heuristics.
    pub fn into_parts(self) -> (W, P, V) {
        self.portfolio.into_parts()
    }

    /// Whether a fatal error ended the current run.
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Strategy chosen by the most recent successful step.
    pub fn last_active(&self) -> Option<ActiveStrategy> {
        self.last_active
    }

    pub fn counts(&self) -> &StrategyCounts {
        &self.counts
    }

    /// Statistics the next step would decide from.
    pub fn statistics<S>(&self) -> RunStatistics
    where
        P: PenaltyHeuristic<S>,
    {
        self.portfolio.snapshot::<S>()
    }

    /// Resets all run state for a fresh run over `state`.
    ///
    /// Clears the shared weight statistics, resets every heuristic (the
    /// penalty heuristic also receives [`PENALTY_IMPROVEMENT_FLOOR`]), reseeds
    /// the random source and zeroes the counters. Also clears an abort left
    /// by a failed [`step`](Self::step).
    ///
    /// [`PENALTY_IMPROVEMENT_FLOOR`]: super::PENALTY_IMPROVEMENT_FLOOR
    #[tracing::instrument(level = "debug", name = "Hybrid init", skip(self, state))]
    pub fn init_run<S>(&mut self, state: &S)
    where
        W: WeightHeuristic<S>,
        P: PenaltyHeuristic<S>,
        V: PromisingHeuristic<S>,
    {
        self.portfolio.reset(state, &self.config);
        self.rng = seeded_rng(self.config.seed);
        self.last_active = None;
        self.counts = StrategyCounts::default();
        self.aborted = None;

        tracing::debug!(
            gamma = self.config.weight_ratio_threshold,
            delta = self.config.penalty_ratio_threshold,
            pi = self.config.penalty_floor_threshold,
            variant = self.config.promising_variant.name(),
            "Hybrid: run initialized"
        );
    }

    /// Performs one search step.
    ///
    /// Picks a heuristic from the current statistics, lets it make its move
    /// and then synchronizes every heuristic's bookkeeping.
    ///
    /// # Errors
    ///
    /// [`HybridError::DegenerateInput`] if the instance has no constraints.
    /// No heuristic runs in that case, and the run stays aborted: every later
    /// call returns the same error until [`init_run`](Self::init_run) starts a
    /// new run.
    pub fn step<S>(&mut self, state: &mut S) -> Result<StepReport, HybridError>
    where
        W: WeightHeuristic<S>,
        P: PenaltyHeuristic<S>,
        V: PromisingHeuristic<S>,
    {
        if let Some(err) = &self.aborted {
            return Err(err.clone());
        }

        let statistics = self.portfolio.snapshot::<S>();
        let strategy = match select_strategy(&statistics, &self.config) {
            Ok(strategy) => strategy,
            Err(err) => {
                tracing::warn!("Hybrid: aborting run: {}", err);
                self.aborted = Some(err.clone());
                return Err(err);
            }
        };

        if self.last_active != Some(strategy) {
            tracing::debug!(
                step = self.counts.total(),
                from = self.last_active.map(ActiveStrategy::name),
                to = strategy.name(),
                "Hybrid: switching heuristic"
            );
        }

        let flipped = self.portfolio.execute(strategy, state, &mut self.rng);
        let effective = flipped.is_some();
        self.portfolio.after_step(effective, strategy, state);

        self.counts.record(strategy, effective);
        self.last_active = Some(strategy);

        tracing::trace!(
            strategy = strategy.name(),
            flipped = ?flipped,
            max_weight = statistics.max_weight,
            mean_weight = statistics.mean_weight,
            total_penalty = statistics.total_penalty,
            max_penalty = statistics.max_penalty,
            "Hybrid: step"
        );

        Ok(StepReport {
            strategy,
            flipped,
            statistics,
        })
    }

    #[cfg(test)]
    pub(crate) fn portfolio_mut(&mut self) -> &mut HybridPortfolio<W, P, V> {
        &mut self.portfolio
    }
}
