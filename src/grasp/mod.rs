//! GRASP construction.
//!
//! Greedy Randomised Adaptive Search Procedure: each construction adds
//! one item at a time, drawn uniformly from a restricted candidate list
//! (RCL) of the highest-scoring feasible items. The `alpha` parameter
//! interpolates between pure greedy (`0`) and uniform random selection
//! over all feasible candidates (`1`). A multi-start loop repeats the
//! construction and keeps the best feasible solution.
//!
//! Randomness flows through a 32-bit Mersenne Twister so that a given
//! seed reproduces the same solution on every platform.
//!
//! # References
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//! search procedures", *Journal of Global Optimization* 6, 109-133.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::GraspConstructor;
