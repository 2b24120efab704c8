//! Heuristic solver for the Disjunctively Constrained Knapsack Problem
//! (DCKP): maximise total profit over a selected item subset, subject
//! to a knapsack capacity and pairwise conflicts that forbid certain
//! item pairs from being chosen together.
//!
//! Three layers, applied in sequence:
//!
//! - **Constructive**: four deterministic greedy orderings
//!   ([`greedy`]) and a randomised multi-start GRASP with a restricted
//!   candidate list ([`grasp`]).
//! - **Local search**: best-improvement hill climbing over 1-for-1
//!   swaps ([`hill_climbing`]) and Variable Neighbourhood Descent over
//!   add/drop, 1-1 and 2-1 swap structures ([`vnd`]), sharing the
//!   generators in [`neighborhood`].
//! - **Experiments**: the [`experiment`] driver loads instance files,
//!   runs the stack and emits CSV result records.
//!
//! # Determinism
//!
//! Everything is single-threaded and deterministic given the instance
//! bytes and the GRASP parameters. Randomness is confined to one 32-bit
//! Mersenne Twister per GRASP constructor, so a seed reproduces the
//! same solutions on every platform. Greedy orderings and neighbourhood
//! enumeration break ties by ascending item index.

pub mod experiment;
pub mod grasp;
pub mod greedy;
pub mod hill_climbing;
pub mod neighborhood;
pub mod problem;
pub mod vnd;
