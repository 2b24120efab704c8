//! Immutable DCKP instance and conflict graph.

use std::fmt::Write as _;

/// A Disjunctively Constrained Knapsack Problem instance.
///
/// Item indices are 0-based throughout the crate; the external file
/// format is 1-based and converted on read. The conflict graph is a
/// sorted, de-duplicated adjacency list per item, giving `O(log d)`
/// conflict queries via binary search in the smaller adjacency.
///
/// An instance is built once by the reader and shared by reference for
/// the rest of the run; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Number of items in the catalogue.
    pub n_items: usize,
    /// Knapsack capacity.
    pub capacity: u64,
    /// Item profits, indexed by item.
    pub profits: Vec<u64>,
    /// Item weights, indexed by item.
    pub weights: Vec<u64>,
    conflicts: Vec<(usize, usize)>,
    conflict_graph: Vec<Vec<usize>>,
}

impl Instance {
    /// Assembles an instance from already-validated parts.
    ///
    /// `conflicts` holds 0-based in-range pairs with distinct endpoints;
    /// the reader is responsible for discarding anything else.
    pub(crate) fn from_parts(
        capacity: u64,
        profits: Vec<u64>,
        weights: Vec<u64>,
        conflicts: Vec<(usize, usize)>,
    ) -> Self {
        let n_items = profits.len();
        debug_assert_eq!(weights.len(), n_items);

        let mut conflict_graph = vec![Vec::new(); n_items];
        for &(u, v) in &conflicts {
            conflict_graph[u].push(v);
            conflict_graph[v].push(u);
        }
        for adjacency in &mut conflict_graph {
            adjacency.sort_unstable();
            adjacency.dedup();
        }

        Self {
            n_items,
            capacity,
            profits,
            weights,
            conflicts,
            conflict_graph,
        }
    }

    /// Whether two items are forbidden from appearing together.
    ///
    /// Binary search in the smaller of the two adjacencies. Out-of-range
    /// indices answer `false`.
    pub fn has_conflict(&self, item1: usize, item2: usize) -> bool {
        if item1 >= self.n_items || item2 >= self.n_items {
            return false;
        }
        let (adjacency, target) =
            if self.conflict_graph[item1].len() <= self.conflict_graph[item2].len() {
                (&self.conflict_graph[item1], item2)
            } else {
                (&self.conflict_graph[item2], item1)
            };
        adjacency.binary_search(&target).is_ok()
    }

    /// Number of items that conflict with `item`.
    pub fn conflict_degree(&self, item: usize) -> usize {
        self.conflict_graph[item].len()
    }

    /// Items conflicting with `item`, ascending.
    pub fn neighbors(&self, item: usize) -> &[usize] {
        &self.conflict_graph[item]
    }

    /// The conflict edges retained from the input, 0-based.
    pub fn conflicts(&self) -> &[(usize, usize)] {
        &self.conflicts
    }

    /// Conflict density as a percentage of all possible item pairs.
    pub fn conflict_density(&self) -> f64 {
        if self.n_items <= 1 {
            return 0.0;
        }
        let pairs = (self.n_items * (self.n_items - 1)) as f64 / 2.0;
        100.0 * self.conflicts.len() as f64 / pairs
    }

    /// One-paragraph statistics summary for logging.
    pub fn describe(&self) -> String {
        let n = self.n_items as f64;
        let mean_profit = self.profits.iter().sum::<u64>() as f64 / n;
        let mean_weight = self.weights.iter().sum::<u64>() as f64 / n;

        let mut out = String::new();
        let _ = write!(
            out,
            "instance: n={}, capacity={}, conflicts={} ({:.2}%)",
            self.n_items,
            self.capacity,
            self.conflicts.len(),
            self.conflict_density(),
        );
        let _ = write!(
            out,
            " | profit [{}-{}] mean {:.2}",
            self.profits.iter().min().copied().unwrap_or(0),
            self.profits.iter().max().copied().unwrap_or(0),
            mean_profit,
        );
        let _ = write!(
            out,
            " | weight [{}-{}] mean {:.2}",
            self.weights.iter().min().copied().unwrap_or(0),
            self.weights.iter().max().copied().unwrap_or(0),
            mean_weight,
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Instance {
        Instance::from_parts(10, vec![10, 9, 8], vec![5, 5, 5], vec![(0, 1), (1, 2)])
    }

    #[test]
    fn test_conflict_graph_is_symmetric() {
        let instance = triangle();
        assert!(instance.has_conflict(0, 1));
        assert!(instance.has_conflict(1, 0));
        assert!(instance.has_conflict(1, 2));
        assert!(instance.has_conflict(2, 1));
        assert!(!instance.has_conflict(0, 2));
    }

    #[test]
    fn test_adjacency_sorted_and_deduplicated() {
        let instance = Instance::from_parts(
            10,
            vec![1, 1, 1, 1],
            vec![1, 1, 1, 1],
            vec![(3, 0), (0, 1), (0, 3), (0, 2)],
        );
        assert_eq!(instance.neighbors(0), &[1, 2, 3]);
        assert_eq!(instance.conflict_degree(0), 3);
        assert_eq!(instance.conflict_degree(3), 1);
    }

    #[test]
    fn test_has_conflict_out_of_range_is_false() {
        let instance = triangle();
        assert!(!instance.has_conflict(0, 99));
        assert!(!instance.has_conflict(99, 0));
    }

    #[test]
    fn test_conflict_density() {
        let instance = Instance::from_parts(
            10,
            vec![1, 1, 1, 1],
            vec![1, 1, 1, 1],
            vec![(0, 1), (2, 3)],
        );
        // 2 of 6 possible pairs.
        let density = instance.conflict_density();
        assert!((density - 100.0 * 2.0 / 6.0).abs() < 1e-9, "got {density}");
        assert_eq!(density.to_bits(), instance.conflict_density().to_bits());
    }

    #[test]
    fn test_conflict_density_degenerate() {
        let single = Instance::from_parts(10, vec![5], vec![3], vec![]);
        assert_eq!(single.conflict_density(), 0.0);
    }

    #[test]
    fn test_describe_mentions_shape() {
        let text = triangle().describe();
        assert!(text.contains("n=3"), "describe output: {text}");
        assert!(text.contains("capacity=10"), "describe output: {text}");
        assert!(text.contains("conflicts=2"), "describe output: {text}");
    }
}
