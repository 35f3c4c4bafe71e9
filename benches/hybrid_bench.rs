//! Criterion benchmarks for the hybrid switcher.
//!
//! Uses synthetic heuristics over a plain boolean assignment to measure the
//! switching and synchronization overhead independent of any SAT encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_hybridsls::hybrid::{
    select_strategy, HybridConfig, HybridSearch, PenaltyHeuristic, PenaltyParams,
    PromisingHeuristic, PromisingParams, RunStatistics, WeightHeuristic, WeightSmoothing,
};

// ===========================================================================
// Synthetic heuristics
// ===========================================================================

struct RandomWeights {
    weights: Vec<f64>,
}

impl WeightHeuristic<Vec<bool>> for RandomWeights {
    fn reset(&mut self, state: &Vec<bool>, _smoothing: WeightSmoothing) {
        self.weights = vec![0.0; state.len()];
    }

    fn execute<R: Rng>(&mut self, state: &mut Vec<bool>, rng: &mut R) -> Option<usize> {
        let var = rng.random_range(0..state.len());
        state[var] = !state[var];
        self.weights[var] += 1.0;
        Some(var)
    }

    fn variable_weights(&self) -> &[f64] {
        &self.weights
    }

    fn update_aux_state(&mut self, _state: &Vec<bool>) {}
}

struct RandomPenalties {
    penalties: Vec<f64>,
    params: Option<PenaltyParams>,
    cursor: usize,
}

impl PenaltyHeuristic<Vec<bool>> for RandomPenalties {
    fn reset(&mut self, _state: &Vec<bool>, params: &PenaltyParams) {
        self.penalties.fill(1.0);
        self.params = Some(*params);
        self.cursor = 0;
    }

    fn execute<R: Rng>(&mut self, state: &mut Vec<bool>, rng: &mut R) -> Option<usize> {
        let var = rng.random_range(0..state.len());
        state[var] = !state[var];
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

    fn post_step_update(&mut self, _state: &Vec<bool>) {
        let Some(params) = self.params else {
            return;
        };
        self.cursor = (self.cursor + 1) % self.penalties.len();
        self.penalties[self.cursor] *= params.scaling_factor;
    }
}

struct RandomPromising;

impl PromisingHeuristic<Vec<bool>> for RandomPromising {
    fn reset(&mut self, _state: &Vec<bool>, _params: &PromisingParams) {}

    fn execute<R: Rng>(&mut self, state: &mut Vec<bool>, rng: &mut R) -> Option<usize> {
        let var = rng.random_range(0..state.len());
        state[var] = !state[var];
        Some(var)
    }

    fn adapt_noise(&mut self, _state: &Vec<bool>) {}
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_select(c: &mut Criterion) {
    let config = HybridConfig::default();
    let stats = RunStatistics {
        max_weight: 5.0,
        mean_weight: 1.0,
        total_penalty: 200.0,
        max_penalty: 25.0,
        constraint_count: 10,
    };
    c.bench_function("select_strategy", |b| {
        b.iter(|| select_strategy(black_box(&stats), black_box(&config)))
    });
}

fn bench_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_step");
    for vars in [100usize, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(vars), &vars, |b, &vars| {
            let mut state = vec![false; vars];
            let mut search = HybridSearch::new(
                HybridConfig::default().with_seed(42),
                RandomWeights {
                    weights: Vec::new(),
                },
                RandomPenalties {
                    penalties: vec![1.0; vars * 4],
                    params: None,
                    cursor: 0,
                },
                RandomPromising,
            )
            .unwrap();
            search.init_run(&state);
            b.iter(|| search.step(black_box(&mut state)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_steps);
criterion_main!(benches);
