//! Feasibility checking.
//!
//! The validator is the single authority on feasibility: every
//! constructor calls [`Validator::validate`] on its finished solution,
//! and tests audit solutions through it rather than trusting cached
//! aggregates.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use log::warn;

use super::{Instance, Solution};

/// Independent recomputation of solution metrics and feasibility.
pub struct Validator<'a> {
    instance: &'a Instance,
}

impl<'a> Validator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// O(1) capacity probe used during construction.
    pub fn check_capacity(&self, current_weight: u64, item_weight: u64) -> bool {
        current_weight + item_weight <= self.instance.capacity
    }

    /// Whether `item` conflicts with no member of `selected`.
    pub fn check_conflicts(&self, item: usize, selected: &BTreeSet<usize>) -> bool {
        selected
            .iter()
            .all(|&other| !self.instance.has_conflict(item, other))
    }

    /// Full audit: recomputes the aggregates from scratch, then checks
    /// the capacity bound and every unordered selected pair for a
    /// conflict edge. Violations are logged. Sets and returns
    /// `is_feasible`.
    pub fn validate(&self, solution: &mut Solution) -> bool {
        self.recalculate_metrics(solution);

        let mut valid = true;

        if solution.total_weight > self.instance.capacity {
            warn!(
                "capacity exceeded: {} > {}",
                solution.total_weight, self.instance.capacity
            );
            valid = false;
        }

        let items: Vec<usize> = solution.items().collect();
        for (position, &first) in items.iter().enumerate() {
            for &second in &items[position + 1..] {
                if self.instance.has_conflict(first, second) {
                    warn!("conflict between items {} and {}", first + 1, second + 1);
                    valid = false;
                }
            }
        }

        solution.is_feasible = valid;
        valid
    }

    /// Recomputes `total_profit` and `total_weight` only, leaving the
    /// feasibility flag alone. Out-of-range items contribute nothing.
    pub fn recalculate_metrics(&self, solution: &mut Solution) {
        let mut profit = 0;
        let mut weight = 0;
        for item in solution.items() {
            if item < self.instance.n_items {
                profit += self.instance.profits[item];
                weight += self.instance.weights[item];
            }
        }
        solution.total_profit = profit;
        solution.total_weight = weight;
    }

    /// Human-readable audit report.
    pub fn validate_detailed(&self, solution: &Solution) -> String {
        let capacity_ok = solution.total_weight <= self.instance.capacity;

        let items: Vec<usize> = solution.items().collect();
        let mut conflict_count = 0;
        for (position, &first) in items.iter().enumerate() {
            for &second in &items[position + 1..] {
                if self.instance.has_conflict(first, second) {
                    conflict_count += 1;
                }
            }
        }

        let mut report = String::new();
        let _ = write!(
            report,
            "items: {}, weight: {}/{}, profit: {}",
            items.len(),
            solution.total_weight,
            self.instance.capacity,
            solution.total_profit,
        );
        let _ = write!(
            report,
            " | capacity: {}",
            if capacity_ok { "ok" } else { "violated" }
        );
        let _ = write!(report, " | conflicts: {conflict_count}");
        let _ = write!(
            report,
            " | {}",
            if capacity_ok && conflict_count == 0 {
                "feasible"
            } else {
                "infeasible"
            }
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance {
        // 4 items, capacity 10, conflict between items 0 and 1.
        Instance::parse("4 10 1\n10 9 8 2\n5 5 5 1\n1 2\n").unwrap()
    }

    fn solution_of(instance: &Instance, items: &[usize]) -> Solution {
        let mut solution = Solution::new();
        for &item in items {
            solution.add_item(item, instance.profits[item], instance.weights[item]);
        }
        solution
    }

    #[test]
    fn test_check_capacity_boundary() {
        let instance = instance();
        let validator = Validator::new(&instance);
        assert!(validator.check_capacity(5, 5));
        assert!(!validator.check_capacity(6, 5));
    }

    #[test]
    fn test_check_conflicts() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let selected: BTreeSet<usize> = [0, 2].into_iter().collect();
        assert!(!validator.check_conflicts(1, &selected));
        assert!(validator.check_conflicts(3, &selected));
    }

    #[test]
    fn test_validate_accepts_feasible() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let mut solution = solution_of(&instance, &[0, 2]);
        assert!(validator.validate(&mut solution));
        assert!(solution.is_feasible);
        assert_eq!(solution.total_profit, 18);
        assert_eq!(solution.total_weight, 10);
    }

    #[test]
    fn test_validate_flags_overweight() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let mut solution = solution_of(&instance, &[0, 2, 3]);
        assert!(!validator.validate(&mut solution));
        assert!(!solution.is_feasible);
    }

    #[test]
    fn test_validate_flags_conflict_pair() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let mut solution = solution_of(&instance, &[0, 1]);
        assert!(!validator.validate(&mut solution));
        assert!(!solution.is_feasible);
    }

    #[test]
    fn test_validate_repairs_drifted_aggregates() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let mut solution = solution_of(&instance, &[0, 2]);
        solution.total_profit = 999;
        solution.total_weight = 999;
        assert!(validator.validate(&mut solution));
        assert_eq!(solution.total_profit, 18);
        assert_eq!(solution.total_weight, 10);
    }

    #[test]
    fn test_recalculate_ignores_feasibility() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let mut solution = solution_of(&instance, &[0, 1]);
        solution.is_feasible = false;
        validator.recalculate_metrics(&mut solution);
        assert_eq!(solution.total_profit, 19);
        assert!(!solution.is_feasible);
    }

    #[test]
    fn test_validate_detailed_reports_violations() {
        let instance = instance();
        let validator = Validator::new(&instance);
        let solution = solution_of(&instance, &[0, 1]);
        let report = validator.validate_detailed(&solution);
        assert!(report.contains("conflicts: 1"), "report: {report}");
        assert!(report.contains("infeasible"), "report: {report}");
    }
}
