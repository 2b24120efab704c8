//! Greedy construction pass.

use std::time::Instant;

use log::debug;

use super::types::GreedyStrategy;
use crate::problem::{Instance, Solution, Validator};

/// Builds solutions with a single strategy-ordered admission pass.
pub struct GreedyConstructor<'a> {
    instance: &'a Instance,
    validator: Validator<'a>,
}

impl<'a> GreedyConstructor<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            validator: Validator::new(instance),
        }
    }

    fn score(&self, item: usize, strategy: GreedyStrategy) -> f64 {
        match strategy {
            GreedyStrategy::MaxProfit => self.instance.profits[item] as f64,
            GreedyStrategy::MinWeight => -(self.instance.weights[item] as f64),
            GreedyStrategy::MaxProfitWeight => {
                let profit = self.instance.profits[item] as f64;
                if self.instance.weights[item] == 0 {
                    1000.0 * profit
                } else {
                    profit / self.instance.weights[item] as f64
                }
            }
            GreedyStrategy::MinConflicts => -(self.instance.conflict_degree(item) as f64),
        }
    }

    /// Items in descending score order. The sort is stable over the
    /// ascending index order, which is the tie-break contract.
    fn order_items(&self, strategy: GreedyStrategy) -> Vec<usize> {
        let scores: Vec<f64> = (0..self.instance.n_items)
            .map(|item| self.score(item, strategy))
            .collect();
        let mut order: Vec<usize> = (0..self.instance.n_items).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        order
    }

    /// Runs one greedy pass under `strategy` and validates the result.
    pub fn construct(&self, strategy: GreedyStrategy) -> Solution {
        let start = Instant::now();

        let mut solution = Solution::new();
        solution.method_name = format!("Greedy_{}", strategy.label());

        for item in self.order_items(strategy) {
            if !self
                .validator
                .check_capacity(solution.total_weight, self.instance.weights[item])
            {
                continue;
            }
            if !self.validator.check_conflicts(item, solution.selected()) {
                continue;
            }
            solution.add_item(item, self.instance.profits[item], self.instance.weights[item]);
        }

        self.validator.validate(&mut solution);
        solution.computation_time = start.elapsed().as_secs_f64();

        debug!(
            "{}: profit {}, {} items, {:.4}s",
            solution.method_name,
            solution.total_profit,
            solution.len(),
            solution.computation_time,
        );
        solution
    }

    /// Runs all four strategies; callers typically keep the max-profit
    /// result.
    pub fn construct_all(&self) -> Vec<Solution> {
        let solutions: Vec<Solution> = GreedyStrategy::ALL
            .into_iter()
            .map(|strategy| self.construct(strategy))
            .collect();

        if let Some(best) = solutions.iter().max_by_key(|s| s.total_profit) {
            debug!("best greedy: {} = {}", best.method_name, best.total_profit);
        }
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_singleton() {
        let instance = Instance::parse("1 10 0\n5\n3\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        for strategy in GreedyStrategy::ALL {
            let solution = greedy.construct(strategy);
            assert_eq!(solution.items().collect::<Vec<_>>(), vec![0]);
            assert_eq!(solution.total_profit, 5);
            assert_eq!(solution.total_weight, 3);
            assert!(solution.is_feasible);
        }
    }

    #[test]
    fn test_capacity_tight_max_profit() {
        let instance = Instance::parse("3 5 0\n4 3 3\n3 2 2\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let solution = greedy.construct(GreedyStrategy::MaxProfit);
        assert_eq!(solution.items().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(solution.total_profit, 7);
        assert_eq!(solution.total_weight, 5);
    }

    #[test]
    fn test_capacity_tight_profit_weight_ratio() {
        let instance = Instance::parse("3 5 0\n4 3 3\n3 2 2\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        // Ratios 1.33, 1.5, 1.5; the tie between items 1 and 2 breaks
        // by index, and item 0 no longer fits.
        let solution = greedy.construct(GreedyStrategy::MaxProfitWeight);
        assert_eq!(solution.items().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(solution.total_profit, 6);
    }

    #[test]
    fn test_best_across_strategies() {
        let instance = Instance::parse("3 5 0\n4 3 3\n3 2 2\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let best = greedy
            .construct_all()
            .into_iter()
            .max_by_key(|s| s.total_profit)
            .unwrap();
        assert_eq!(best.total_profit, 7);
    }

    #[test]
    fn test_conflict_blocks_greedy() {
        let instance = Instance::parse("3 10 1\n10 9 8\n5 5 5\n1 2\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let solution = greedy.construct(GreedyStrategy::MaxProfit);
        // Item 0 first, item 1 conflicts with it, item 2 still fits.
        assert_eq!(solution.items().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(solution.total_profit, 18);
        assert!(solution.is_feasible);
    }

    #[test]
    fn test_zero_weight_sentinel_orders_first() {
        // Item 0 has weight 0: sentinel score 5000 beats 100/10 = 10,
        // and the conflict then keeps item 1 out.
        let instance = Instance::parse("2 10 1\n5 100\n0 10\n1 2\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let solution = greedy.construct(GreedyStrategy::MaxProfitWeight);
        assert_eq!(solution.items().collect::<Vec<_>>(), vec![0]);
        assert_eq!(solution.total_profit, 5);
    }

    #[test]
    fn test_min_conflicts_prefers_isolated_items() {
        // Item 0 conflicts with both others; MinConflicts starts from
        // the isolated pair instead.
        let instance = Instance::parse("3 10 2\n10 4 4\n2 2 2\n1 2\n1 3\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let solution = greedy.construct(GreedyStrategy::MinConflicts);
        assert_eq!(solution.items().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(solution.total_profit, 8);
    }

    #[test]
    fn test_construct_all_method_names() {
        let instance = Instance::parse("1 10 0\n5\n3\n").unwrap();
        let greedy = GreedyConstructor::new(&instance);
        let names: Vec<String> = greedy
            .construct_all()
            .into_iter()
            .map(|s| s.method_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Greedy_MaxProfit",
                "Greedy_MinWeight",
                "Greedy_MaxProfitWeight",
                "Greedy_MinConflicts",
            ]
        );
    }
}
