//! Switcher configuration and presets.

use super::error::HybridError;

/// Improvement-acceptance floor handed to the penalty-driven heuristic at
/// every run start.
///
/// A candidate flip counts as improving for the penalty heuristic when its
/// penalty delta is below this value.
pub const PENALTY_IMPROVEMENT_FLOOR: f64 = -0.1;

/// Named parameter presets.
///
/// The two presets differ only in their default switching thresholds and in
/// whether automatic weight smoothing is wired into the weight-driven
/// heuristic.
///
/// # References
///
/// Wei, Li & Zhang (2008), "Switching among Non-Weighting, Clause Weighting,
/// and Variable Weighting in Local Search for SAT", CP 2008.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Thresholds from the CP 2008 paper, no weight smoothing.
    #[default]
    Paper,

    /// SAT Competition 2009 submission: tighter weight-ratio threshold and
    /// automatic weight smoothing.
    Competition2009,
}

/// Sub-variant used by the promising-variable heuristic when no promising
/// variable is available.
///
/// Ordinals follow the declaration order (0 through 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromisingVariant {
    /// Novelty+.
    #[default]
    NoveltyPlus,
    /// Novelty++.
    NoveltyPlusPlus,
    /// Novelty+p.
    NoveltyPlusP,
    /// Novelty++p.
    NoveltyPlusPlusP,
    /// Novelty++ with diversification variant 0.
    NoveltyPlusPlus0,
    /// Novelty++ with diversification variant 1.
    NoveltyPlusPlus1,
    /// Novelty++ with diversification variant 2.
    NoveltyPlusPlus2,
}

impl PromisingVariant {
    /// All variants in ordinal order.
    pub const ALL: [PromisingVariant; 7] = [
        PromisingVariant::NoveltyPlus,
        PromisingVariant::NoveltyPlusPlus,
        PromisingVariant::NoveltyPlusP,
        PromisingVariant::NoveltyPlusPlusP,
        PromisingVariant::NoveltyPlusPlus0,
        PromisingVariant::NoveltyPlusPlus1,
        PromisingVariant::NoveltyPlusPlus2,
    ];

    /// Returns the ordinal of this variant.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Returns the conventional display name.
    pub fn name(self) -> &'static str {
        match self {
            PromisingVariant::NoveltyPlus => "Novelty+",
            PromisingVariant::NoveltyPlusPlus => "Novelty++",
            PromisingVariant::NoveltyPlusP => "Novelty+p",
            PromisingVariant::NoveltyPlusPlusP => "Novelty++p",
            PromisingVariant::NoveltyPlusPlus0 => "Novelty++0",
            PromisingVariant::NoveltyPlusPlus1 => "Novelty++1",
            PromisingVariant::NoveltyPlusPlus2 => "Novelty++2",
        }
    }
}

impl TryFrom<u32> for PromisingVariant {
    type Error = HybridError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        PromisingVariant::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| {
                HybridError::out_of_range("promising_variant", ordinal as f64, "0..=6")
            })
    }
}

/// How the promising-variable heuristic picks among several promising
/// variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromisingSelection {
    /// Highest score.
    Best,
    /// Least recently flipped.
    #[default]
    Oldest,
    /// Uniformly at random.
    Random,
}

impl PromisingSelection {
    /// Returns the ordinal of this policy.
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for PromisingSelection {
    type Error = HybridError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(PromisingSelection::Best),
            1 => Ok(PromisingSelection::Oldest),
            2 => Ok(PromisingSelection::Random),
            _ => Err(HybridError::out_of_range(
                "promising_selection",
                ordinal as f64,
                "0..=2",
            )),
        }
    }
}

/// Whether the weight-driven heuristic decays its variable weights on its
/// own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightSmoothing {
    /// Weights only ever grow.
    #[default]
    Off,
    /// Weights are periodically smoothed with a self-tuned factor.
    Auto,
}

/// Tunables consumed by the penalty-driven heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyParams {
    /// Probability of a random walk step at a local minimum, in [0, 1].
    pub walk_probability: f64,

    /// Multiplier applied to unsatisfied constraint penalties at a local
    /// minimum (alpha).
    pub scaling_factor: f64,

    /// Factor used when penalties are smoothed (rho), in [0, 1].
    pub smoothing_factor: f64,

    /// Penalty delta a flip must undercut to count as improving.
    pub improvement_floor: f64,
}

/// Tunables consumed by the promising-variable heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromisingParams {
    pub variant: PromisingVariant,
    pub selection: PromisingSelection,
}

/// Configuration for the hybrid switcher.
///
/// # Switching
///
/// At every step the switcher computes `mean_penalty = total / constraints`
/// and then picks, in priority order:
///
/// 1. the weight-driven heuristic if `max_weight >= weight_ratio_threshold * mean_weight`;
/// 2. the penalty-driven heuristic if `mean_penalty <= penalty_floor_threshold`
///    or `max_penalty >= penalty_ratio_threshold * mean_penalty`;
/// 3. the promising-variable heuristic otherwise.
///
/// # Examples
///
/// ```
/// use u_hybridsls::hybrid::{HybridConfig, Preset, PromisingSelection};
///
/// let config = HybridConfig::preset(Preset::Competition2009)
///     .with_penalty_floor_threshold(12.0)
///     .with_promising_selection(PromisingSelection::Best)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!((config.weight_ratio_threshold - 1.0122).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridConfig {
    /// Weight-ratio threshold (gamma).
    ///
    /// The weight-driven heuristic is used when the maximum variable weight
    /// reaches this multiple of the mean weight.
    pub weight_ratio_threshold: f64,

    /// Penalty-ratio threshold (delta).
    ///
    /// The penalty-driven heuristic is used when the maximum constraint
    /// penalty reaches this multiple of the mean penalty.
    pub penalty_ratio_threshold: f64,

    /// Penalty-floor threshold (pi).
    ///
    /// The penalty-driven heuristic is used when the mean penalty is at or
    /// below this value.
    pub penalty_floor_threshold: f64,

    /// Promising-variable sub-variant.
    pub promising_variant: PromisingVariant,

    /// Promising-variable tie-break policy.
    pub promising_selection: PromisingSelection,

    /// Random walk probability of the penalty-driven heuristic, in [0, 1].
    pub walk_probability: f64,

    /// Penalty scaling factor (alpha).
    pub penalty_scaling: f64,

    /// Penalty smoothing factor (rho), in [0, 1].
    pub penalty_smoothing: f64,

    /// Weight smoothing mode of the weight-driven heuristic.
    pub weight_smoothing: WeightSmoothing,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self::preset(Preset::Paper)
    }
}

impl HybridConfig {
    /// Builds the configuration of a named preset.
    pub fn preset(preset: Preset) -> Self {
        let base = Self {
            weight_ratio_threshold: 7.5,
            penalty_ratio_threshold: 3.0,
            penalty_floor_threshold: 15.0,
            promising_variant: PromisingVariant::default(),
            promising_selection: PromisingSelection::default(),
            walk_probability: 0.05,
            penalty_scaling: 1.3,
            penalty_smoothing: 0.8,
            weight_smoothing: WeightSmoothing::Off,
            seed: None,
        };
        match preset {
            Preset::Paper => base,
            Preset::Competition2009 => Self {
                weight_ratio_threshold: 1.0122,
                penalty_ratio_threshold: 2.75,
                weight_smoothing: WeightSmoothing::Auto,
                ..base
            },
        }
    }

    pub fn with_weight_ratio_threshold(mut self, gamma: f64) -> Self {
        self.weight_ratio_threshold = gamma;
        self
    }

    pub fn with_penalty_ratio_threshold(mut self, delta: f64) -> Self {
        self.penalty_ratio_threshold = delta;
        self
    }

    pub fn with_penalty_floor_threshold(mut self, pi: f64) -> Self {
        self.penalty_floor_threshold = pi;
        self
    }

    pub fn with_promising_variant(mut self, variant: PromisingVariant) -> Self {
        self.promising_variant = variant;
        self
    }

    pub fn with_promising_selection(mut self, selection: PromisingSelection) -> Self {
        self.promising_selection = selection;
        self
    }

    pub fn with_walk_probability(mut self, p: f64) -> Self {
        self.walk_probability = p;
        self
    }

    pub fn with_penalty_scaling(mut self, alpha: f64) -> Self {
        self.penalty_scaling = alpha;
        self
    }

    pub fn with_penalty_smoothing(mut self, rho: f64) -> Self {
        self.penalty_smoothing = rho;
        self
    }

    pub fn with_weight_smoothing(mut self, smoothing: WeightSmoothing) -> Self {
        self.weight_smoothing = smoothing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tunables handed to the penalty-driven heuristic at run start.
    pub fn penalty_params(&self) -> PenaltyParams {
        PenaltyParams {
            walk_probability: self.walk_probability,
            scaling_factor: self.penalty_scaling,
            smoothing_factor: self.penalty_smoothing,
            improvement_floor: PENALTY_IMPROVEMENT_FLOOR,
        }
    }

    /// Tunables handed to the promising-variable heuristic at run start.
    pub fn promising_params(&self) -> PromisingParams {
        PromisingParams {
            variant: self.promising_variant,
            selection: self.promising_selection,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), HybridError> {
        if !self.weight_ratio_threshold.is_finite() || self.weight_ratio_threshold <= 0.0 {
            return Err(HybridError::out_of_range(
                "weight_ratio_threshold",
                self.weight_ratio_threshold,
                "a finite value > 0",
            ));
        }
        if !self.penalty_ratio_threshold.is_finite() || self.penalty_ratio_threshold <= 0.0 {
            return Err(HybridError::out_of_range(
                "penalty_ratio_threshold",
                self.penalty_ratio_threshold,
                "a finite value > 0",
            ));
        }
        if !self.penalty_floor_threshold.is_finite() || self.penalty_floor_threshold < 0.0 {
            return Err(HybridError::out_of_range(
                "penalty_floor_threshold",
                self.penalty_floor_threshold,
                "a finite value >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.walk_probability) {
            return Err(HybridError::out_of_range(
                "walk_probability",
                self.walk_probability,
                "[0, 1]",
            ));
        }
        if !self.penalty_scaling.is_finite() || self.penalty_scaling <= 0.0 {
            return Err(HybridError::out_of_range(
                "penalty_scaling",
                self.penalty_scaling,
                "a finite value > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.penalty_smoothing) {
            return Err(HybridError::out_of_range(
                "penalty_smoothing",
                self.penalty_smoothing,
                "[0, 1]",
            ));
        }
        Ok(())
    }
}
