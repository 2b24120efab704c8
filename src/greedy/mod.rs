//! Deterministic greedy construction.
//!
//! Four scoring strategies rank the catalogue once; a single pass then
//! admits each item that fits the remaining capacity and conflicts with
//! nothing already selected. Ties in score break by ascending item
//! index, so every strategy is fully deterministic.

mod runner;
mod types;

pub use runner::GreedyConstructor;
pub use types::GreedyStrategy;
