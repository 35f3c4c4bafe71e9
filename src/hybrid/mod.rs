//! Hybrid strategy switching for stochastic local search.
//!
//! At every step the switcher reads aggregate statistics of the search
//! (variable weights and constraint penalties), picks one of three
//! move-selection heuristics, and afterwards keeps the bookkeeping of all
//! three current so any of them can take over on the next step.
//!
//! - **Weight-driven**: variable weighting, chosen when a few variables carry
//!   far more weight than the average.
//! - **Penalty-driven**: clause penalties with scaling and smoothing, chosen
//!   when penalties are low overall or sharply peaked.
//! - **Promising-variable**: non-weighting selection from promising
//!   decreasing variables, chosen otherwise.
//!
//! # References
//!
//! - Wei, Li & Zhang (2008), "Switching among Non-Weighting, Clause Weighting,
//!   and Variable Weighting in Local Search for SAT", CP 2008.
//! - Hutter, Tompkins & Hoos (2002), "Scaling and Probabilistic Smoothing:
//!   Efficient Dynamic Local Search for SAT", CP 2002.
//! - Li & Huang (2005), "Diversification and Determinism in Local Search for
//!   Satisfiability", SAT 2005.

mod config;
mod controller;
mod error;
mod portfolio;
mod runner;
mod stats;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{
    HybridConfig, PenaltyParams, Preset, PromisingParams, PromisingSelection, PromisingVariant,
    WeightSmoothing, PENALTY_IMPROVEMENT_FLOOR,
};
pub use controller::select_strategy;
pub use error::HybridError;
pub use portfolio::HybridPortfolio;
pub use runner::{HybridSearch, StepReport, StrategyCounts};
pub use stats::WeightStatistics;
pub use types::{
    ActiveStrategy, PenaltyHeuristic, PromisingHeuristic, RunStatistics, WeightHeuristic,
};
