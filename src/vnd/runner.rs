//! VND schedule.

use std::time::Instant;

use log::debug;

use super::config::VndConfig;
use crate::neighborhood::{self, Neighborhood};
use crate::problem::{Instance, Solution};

const NEIGHBORHOODS: [Neighborhood; 3] = [
    Neighborhood::AddDrop,
    Neighborhood::Swap11,
    Neighborhood::Swap21,
];

/// Variable Neighbourhood Descent over the three DCKP structures.
pub struct Vnd<'a> {
    instance: &'a Instance,
}

impl<'a> Vnd<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Descends from `initial` until every neighbourhood is clean or
    /// the iteration cap is reached. The input solution is not
    /// modified.
    pub fn solve(&self, initial: &Solution, config: &VndConfig) -> Solution {
        let start = Instant::now();

        let mut current = initial.clone();
        let mut k = 0usize;
        let mut iterations = 0usize;
        let mut improvements = 0usize;

        while k < NEIGHBORHOODS.len() && iterations < config.max_iterations {
            let neighbors = NEIGHBORHOODS[k].generate(self.instance, &current);
            match neighborhood::best_improving(&current, &neighbors) {
                Some(better) => {
                    current = better;
                    k = 0;
                    improvements += 1;
                }
                None => k += 1,
            }
            iterations += 1;
        }

        current.method_name = String::from("VND");
        current.computation_time = start.elapsed().as_secs_f64();

        debug!(
            "vnd: profit {}, {} iterations, {} improvements, {:.4}s",
            current.total_profit, iterations, improvements, current.computation_time,
        );
        current
    }
}
