//! Hybrid local-search strategy switching.
//!
//! Provides the meta-controller of a hybrid stochastic local search: a
//! per-step rule that picks one of three move-selection heuristics from
//! live search statistics, and the bookkeeping that keeps the idle
//! heuristics ready to take over.
//!
//! - **Switching rule**: [`hybrid::select_strategy`], a pure function of the
//!   current statistics and three thresholds.
//! - **Synchronization**: [`hybrid::HybridPortfolio`], which refreshes every
//!   heuristic's state after each effective step. Read-only outside the
//!   crate.
//! - **Dispatch**: [`hybrid::HybridSearch`], the per-run context exposing
//!   `init_run` and `step` to the outer search loop.
//!
//! # Architecture
//!
//! The problem representation and the three heuristics are external: they
//! plug in through the [`hybrid::WeightHeuristic`],
//! [`hybrid::PenaltyHeuristic`] and [`hybrid::PromisingHeuristic`] traits,
//! generic over the caller's search state. This crate owns only the
//! decision and the synchronization between them.

pub mod hybrid;
