//! Result records and CSV emission.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::problem::Solution;

/// One row of experiment output: a method's result on one instance.
#[derive(Debug, Clone)]
pub struct ExperimentRecord {
    /// Instance file basename.
    pub instance: String,
    /// Method name as produced by the solver, e.g. `Greedy_MaxProfit`.
    pub method: String,
    pub profit: u64,
    pub weight: u64,
    pub num_items: usize,
    /// Elapsed wall-clock seconds.
    pub time: f64,
    pub feasible: bool,
}

impl ExperimentRecord {
    pub fn from_solution(instance: &str, solution: &Solution) -> Self {
        Self {
            instance: instance.to_owned(),
            method: solution.method_name.clone(),
            profit: solution.total_profit,
            weight: solution.total_weight,
            num_items: solution.len(),
            time: solution.computation_time,
            feasible: solution.is_feasible,
        }
    }
}

/// Writes the records as CSV: header row, then one row per record with
/// six fractional digits of time and `Yes`/`No` feasibility.
pub fn write_csv(records: &[ExperimentRecord], path: impl AsRef<Path>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "Instance,Method,Profit,Weight,NumItems,Time,Feasible")?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{:.6},{}",
            record.instance,
            record.method,
            record.profit,
            record.weight,
            record.num_items,
            record.time,
            if record.feasible { "Yes" } else { "No" },
        )?;
    }
    out.flush()
}
