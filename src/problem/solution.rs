//! Solution representation.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A candidate solution: the selected item set plus cached aggregates.
///
/// The set is ordered (ascending item index) so pairwise conflict audits
/// and neighbourhood enumeration are deterministic. `add_item` and
/// `remove_item` keep `total_profit` and `total_weight` in sync; a
/// duplicate insert or an absent removal is a no-op that leaves the
/// aggregates untouched.
///
/// Solutions are ranked by `total_profit` alone.
#[derive(Debug, Clone)]
pub struct Solution {
    selected: BTreeSet<usize>,
    /// Sum of profits over the selected items.
    pub total_profit: u64,
    /// Sum of weights over the selected items.
    pub total_weight: u64,
    /// Set by [`Validator::validate`](super::Validator::validate).
    pub is_feasible: bool,
    /// Wall-clock seconds spent producing this solution.
    pub computation_time: f64,
    /// Name of the method that produced this solution.
    pub method_name: String,
}

impl Solution {
    /// An empty solution, trivially feasible.
    pub fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
            total_profit: 0,
            total_weight: 0,
            is_feasible: true,
            computation_time: 0.0,
            method_name: String::from("Unknown"),
        }
    }

    /// Adds `item`, updating the aggregates. No-op if already selected.
    pub fn add_item(&mut self, item: usize, profit: u64, weight: u64) {
        if self.selected.insert(item) {
            self.total_profit += profit;
            self.total_weight += weight;
        }
    }

    /// Removes `item`, updating the aggregates. No-op if absent.
    pub fn remove_item(&mut self, item: usize, profit: u64, weight: u64) {
        if self.selected.remove(&item) {
            self.total_profit -= profit;
            self.total_weight -= weight;
        }
    }

    pub fn contains(&self, item: usize) -> bool {
        self.selected.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected items in ascending order.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// The selected set itself.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Empties the selection and resets the aggregates.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.total_profit = 0;
        self.total_weight = 0;
        self.is_feasible = true;
        self.computation_time = 0.0;
    }

    /// Writes the solution dump format: aggregates on the first line,
    /// 1-based item indices on the second.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(
            out,
            "{} {} {}",
            self.total_profit,
            self.total_weight,
            self.selected.len()
        )?;
        let items: Vec<String> = self.selected.iter().map(|i| (i + 1).to_string()).collect();
        writeln!(out, "{}", items.join(" "))?;
        out.flush()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] profit={}, weight={}, items={}, {}, {:.4}s",
            self.method_name,
            self.total_profit,
            self.total_weight,
            self.selected.len(),
            if self.is_feasible {
                "feasible"
            } else {
                "infeasible"
            },
            self.computation_time,
        )
    }
}
