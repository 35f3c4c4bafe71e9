//! Counting heuristics for unit tests.

use super::config::{PenaltyParams, PromisingParams, WeightSmoothing};
use super::portfolio::HybridPortfolio;
use super::types::{PenaltyHeuristic, PromisingHeuristic, WeightHeuristic};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub values: Vec<bool>,
}

impl Assignment {
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![false; n],
        }
    }

    fn flip(&mut self, var: usize) {
        self.values[var] = !self.values[var];
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockWeight {
    pub weights: Vec<f64>,
    pub smoothing: Option<WeightSmoothing>,
    pub next_move: Option<usize>,
    pub resets: usize,
    pub executions: usize,
    pub aux_updates: usize,
}

impl WeightHeuristic<Assignment> for MockWeight {
    fn reset(&mut self, state: &Assignment, smoothing: WeightSmoothing) {
        self.weights = vec![0.0; state.values.len()];
        self.smoothing = Some(smoothing);
        self.resets += 1;
        self.executions = 0;
        self.aux_updates = 0;
    }

    fn execute<R: Rng>(&mut self, state: &mut Assignment, _rng: &mut R) -> Option<usize> {
        self.executions += 1;
        let var = self.next_move?;
        state.flip(var);
        self.weights[var] += 1.0;
        Some(var)
    }

    fn variable_weights(&self) -> &[f64] {
        &self.weights
    }

    fn update_aux_state(&mut self, _state: &Assignment) {
        self.aux_updates += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockPenalty {
    pub penalties: Vec<f64>,
    pub params: Option<PenaltyParams>,
    pub next_move: Option<usize>,
    /// Flip a variable drawn from the step's generator instead of `next_move`.
    pub random_moves: bool,
    pub resets: usize,
    pub executions: usize,
    pub post_step_updates: usize,
}

impl PenaltyHeuristic<Assignment> for MockPenalty {
    fn reset(&mut self, _state: &Assignment, params: &PenaltyParams) {
        self.penalties.fill(1.0);
        self.params = Some(*params);
        self.resets += 1;
        self.executions = 0;
        self.post_step_updates = 0;
    }

    fn execute<R: Rng>(&mut self, state: &mut Assignment, rng: &mut R) -> Option<usize> {
        self.executions += 1;
        let var = if self.random_moves {
            rng.random_range(0..state.values.len())
        } else {
            self.next_move?
        };
        state.flip(var);
        Some(var)
    }

    fn total_penalty(&self) -> f64 {
        self.penalties.iter().sum()
    }

    fn max_penalty(&self) -> f64 {
        self.penalties.iter().copied().fold(0.0, f64::max)
    }

    fn constraint_count(&self) -> usize {
        self.penalties.len()
    }

    fn post_step_update(&mut self, _state: &Assignment) {
        self.post_step_updates += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockPromising {
    pub noise: f64,
    pub params: Option<PromisingParams>,
    pub next_move: Option<usize>,
    pub resets: usize,
    pub executions: usize,
    pub noise_adaptations: usize,
}

impl PromisingHeuristic<Assignment> for MockPromising {
    fn reset(&mut self, _state: &Assignment, params: &PromisingParams) {
        self.noise = 0.0;
        self.params = Some(*params);
        self.resets += 1;
        self.executions = 0;
        self.noise_adaptations = 0;
    }

    fn execute<R: Rng>(&mut self, state: &mut Assignment, _rng: &mut R) -> Option<usize> {
        self.executions += 1;
        let var = self.next_move?;
        state.flip(var);
        Some(var)
    }

    fn adapt_noise(&mut self, _state: &Assignment) {
        self.noise = (self.noise + 0.05).min(1.0);
        self.noise_adaptations += 1;
    }
}

pub type MockPortfolio = HybridPortfolio<MockWeight, MockPenalty, MockPromising>;

/// Portfolio over `vars` variables and `constraints` unit-penalty constraints.
pub fn portfolio(vars: usize, constraints: usize) -> MockPortfolio {
    HybridPortfolio::new(
        MockWeight {
            weights: vec![0.0; vars],
            ..Default::default()
        },
        MockPenalty {
            penalties: vec![1.0; constraints],
            ..Default::default()
        },
        MockPromising::default(),
    )
}
