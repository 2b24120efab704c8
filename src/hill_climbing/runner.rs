//! Hill climbing loop.

use std::time::Instant;

use log::debug;

use super::config::HillClimbingConfig;
use crate::neighborhood;
use crate::problem::{Instance, Solution};

/// Best-improvement hill climber over the Swap(1-1) neighbourhood.
pub struct HillClimbing<'a> {
    instance: &'a Instance,
}

impl<'a> HillClimbing<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Climbs from `initial` until a local optimum or the iteration
    /// cap. The input solution is not modified.
    pub fn solve(&self, initial: &Solution, config: &HillClimbingConfig) -> Solution {
        let start = Instant::now();

        let mut current = initial.clone();
        let mut iterations = 0usize;
        let mut improvements = 0usize;

        while iterations < config.max_iterations {
            let swaps = neighborhood::swap_1_1(self.instance, &current);
            let Some(better) = neighborhood::best_improving(&current, &swaps) else {
                break;
            };
            current = better;
            improvements += 1;
            iterations += 1;
        }

        current.method_name = String::from("HillClimbing");
        current.computation_time = start.elapsed().as_secs_f64();

        debug!(
            "hill climbing: profit {}, {} iterations, {} improvements, {:.4}s",
            current.total_profit, iterations, improvements, current.computation_time,
        );
        current
    }
}
