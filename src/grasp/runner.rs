//! GRASP construction loop.

use std::time::Instant;

use log::debug;
use rand::Rng;
use rand_mt::Mt;

use super::config::GraspConfig;
use crate::problem::{Instance, Solution, Validator};

/// Randomised constructor owning a seeded Mersenne Twister engine.
///
/// The engine state is the only mutable state; re-seeding via
/// [`set_seed`](GraspConstructor::set_seed) makes every subsequent
/// construction deterministic from that point.
pub struct GraspConstructor<'a> {
    instance: &'a Instance,
    validator: Validator<'a>,
    rng: Mt,
}

impl<'a> GraspConstructor<'a> {
    pub fn new(instance: &'a Instance, seed: u32) -> Self {
        Self {
            instance,
            validator: Validator::new(instance),
            rng: Mt::new(seed),
        }
    }

    /// Re-seeds the random engine.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng = Mt::new(seed);
    }

    /// Profit-per-weight score dampened by the item's conflict degree.
    ///
    /// Candidates already pass the conflict filter, so no selected item
    /// conflicts with them; only the global degree contributes to the
    /// penalty.
    fn candidate_score(&self, item: usize) -> f64 {
        let profit = self.instance.profits[item] as f64;
        let base = if self.instance.weights[item] == 0 {
            1000.0 * profit
        } else {
            profit / self.instance.weights[item] as f64
        };
        base / (1.0 + 0.1 * self.instance.conflict_degree(item) as f64)
    }

    /// Scores every feasible unselected candidate and keeps those at or
    /// above `s_max - alpha * (s_max - s_min)`, ordered by descending
    /// score with index as the tie-break. Non-empty whenever any
    /// candidate exists.
    fn build_rcl(&self, solution: &Solution, alpha: f64) -> Vec<usize> {
        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for item in 0..self.instance.n_items {
            if solution.contains(item) {
                continue;
            }
            if !self
                .validator
                .check_capacity(solution.total_weight, self.instance.weights[item])
            {
                continue;
            }
            if !self.validator.check_conflicts(item, solution.selected()) {
                continue;
            }
            candidates.push((item, self.candidate_score(item)));
        }

        if candidates.is_empty() {
            return Vec::new();
        }

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let s_max = candidates.first().map(|c| c.1).unwrap_or(0.0);
        let s_min = candidates.last().map(|c| c.1).unwrap_or(0.0);
        let threshold = s_max - alpha * (s_max - s_min);

        candidates
            .into_iter()
            .filter(|&(_, score)| score >= threshold)
            .map(|(item, _)| item)
            .collect()
    }

    /// Builds one solution: draw uniformly from the RCL until it runs
    /// dry, then validate.
    pub fn construct(&mut self, alpha: f64) -> Solution {
        let start = Instant::now();

        let mut solution = Solution::new();
        solution.method_name = format!("GRASP_alpha{alpha}");

        loop {
            let rcl = self.build_rcl(&solution, alpha);
            if rcl.is_empty() {
                break;
            }
            let item = rcl[self.rng.random_range(0..rcl.len())];
            solution.add_item(item, self.instance.profits[item], self.instance.weights[item]);
        }

        self.validator.validate(&mut solution);
        solution.computation_time = start.elapsed().as_secs_f64();
        solution
    }

    /// Runs `config.iterations` constructions and keeps the strictly
    /// best feasible solution; ties keep the earlier one. The recorded
    /// time covers the whole multi-start.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GraspConfig::validate`] first for a descriptive error).
    pub fn multi_start(&mut self, config: &GraspConfig) -> Solution {
        config.validate().expect("invalid GraspConfig");

        let start = Instant::now();

        let mut best: Option<Solution> = None;
        let mut feasible_count = 0usize;
        let mut profit_sum = 0u64;
        let mut improved_count = 0usize;

        for iteration in 0..config.iterations {
            let current = self.construct(config.alpha);
            if !current.is_feasible {
                continue;
            }
            feasible_count += 1;
            profit_sum += current.total_profit;

            if best
                .as_ref()
                .is_none_or(|b| current.total_profit > b.total_profit)
            {
                debug!(
                    "grasp iteration {}: new best profit {}",
                    iteration + 1,
                    current.total_profit
                );
                best = Some(current);
                improved_count += 1;
            }
        }

        let mut best = best.unwrap_or_else(|| {
            let mut empty = Solution::new();
            self.validator.validate(&mut empty);
            empty
        });
        best.method_name = format!("GRASP_{}_{}", config.iterations, config.alpha);
        best.computation_time = start.elapsed().as_secs_f64();

        if feasible_count > 0 {
            debug!(
                "grasp multi-start: best {}, mean {:.2}, {} improvements, {}/{} feasible",
                best.total_profit,
                profit_sum as f64 / feasible_count as f64,
                improved_count,
                feasible_count,
                config.iterations,
            );
        }
        best
    }
}
