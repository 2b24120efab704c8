//! Best-improvement hill climbing.
//!
//! Repeatedly replaces the current solution with the most profitable
//! strictly improving Swap(1-1) neighbour until none exists (a local
//! optimum) or the iteration cap is reached. Equal-profit neighbours do
//! not move the search.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbing;
