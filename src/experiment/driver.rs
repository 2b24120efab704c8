//! Instance processing and batch orchestration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::record::ExperimentRecord;
use crate::grasp::{GraspConfig, GraspConstructor};
use crate::greedy::GreedyConstructor;
use crate::hill_climbing::{HillClimbing, HillClimbingConfig};
use crate::problem::{Instance, InstanceError};
use crate::vnd::{Vnd, VndConfig};

/// Fatal driver failure. Per-instance load errors inside a batch are
/// logged and skipped instead of surfacing here.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("i/o failure")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Which layers of the heuristic stack a batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// Greedy strategies plus GRASP.
    Constructive,
    /// GRASP, then hill climbing and VND each seeded from the GRASP
    /// solution.
    LocalSearch,
    /// Both layers.
    Full,
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs the configured layers on one loaded instance.
///
/// Both local searches start from the same GRASP solution; neither is
/// chained after the other.
fn process_instance(instance: &Instance, name: &str, phase: BatchPhase) -> Vec<ExperimentRecord> {
    let mut records = Vec::new();

    if matches!(phase, BatchPhase::Constructive | BatchPhase::Full) {
        let greedy = GreedyConstructor::new(instance);
        for solution in greedy.construct_all() {
            records.push(ExperimentRecord::from_solution(name, &solution));
        }
    }

    let config = GraspConfig::default();
    let mut grasp = GraspConstructor::new(instance, config.seed);
    let grasp_solution = grasp.multi_start(&config);
    records.push(ExperimentRecord::from_solution(name, &grasp_solution));

    if matches!(phase, BatchPhase::LocalSearch | BatchPhase::Full) {
        let climbed = HillClimbing::new(instance)
            .solve(&grasp_solution, &HillClimbingConfig::default());
        records.push(ExperimentRecord::from_solution(name, &climbed));

        let descended = Vnd::new(instance).solve(&grasp_solution, &VndConfig::default());
        records.push(ExperimentRecord::from_solution(name, &descended));
    }

    if let Some(best) = records.iter().max_by_key(|r| r.profit) {
        info!("{name}: best method {} with profit {}", best.method, best.profit);
    }
    records
}

/// Loads one instance and runs the full stack on it.
pub fn run_single(path: impl AsRef<Path>) -> Result<Vec<ExperimentRecord>, ExperimentError> {
    let path = path.as_ref();
    let instance = Instance::from_path(path)?;
    info!("{}", instance.describe());
    Ok(process_instance(&instance, &basename(path), BatchPhase::Full))
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            walk(&path, files)?;
            continue;
        }
        if !file_type.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.to_string_lossy().contains(".csv") {
            continue;
        }
        files.push(path);
    }
    Ok(())
}

/// Recursively collects instance files under `dir`: regular files whose
/// basename does not start with `.` and whose path does not contain
/// `.csv`. Sorted so batch order is deterministic.
pub fn collect_instances(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir.as_ref(), &mut files)?;
    files.sort();
    Ok(files)
}

/// Runs `phase` on every instance under `dir`. Unloadable instances are
/// reported and skipped.
pub fn run_batch(
    dir: impl AsRef<Path>,
    phase: BatchPhase,
) -> Result<Vec<ExperimentRecord>, ExperimentError> {
    let mut all_records = Vec::new();

    for path in collect_instances(dir)? {
        info!("processing {}", path.display());
        let instance = match Instance::from_path(&path) {
            Ok(instance) => instance,
            Err(error) => {
                warn!("skipping {}: {error}", path.display());
                continue;
            }
        };
        info!("{}", instance.describe());
        all_records.extend(process_instance(&instance, &basename(&path), phase));
    }

    Ok(all_records)
}

/// Sweeps `alpha` over `{0.0, 0.1, ..., 1.0}` with a multi-start per
/// value, producing one record per alpha.
pub fn tune_alpha(
    path: impl AsRef<Path>,
    iterations: usize,
) -> Result<Vec<ExperimentRecord>, ExperimentError> {
    let path = path.as_ref();
    let instance = Instance::from_path(path)?;
    info!("{}", instance.describe());
    let name = basename(path);

    let mut records = Vec::new();
    for step in 0..=10 {
        let alpha = step as f64 / 10.0;
        let config = GraspConfig::default()
            .with_iterations(iterations)
            .with_alpha(alpha);
        let mut grasp = GraspConstructor::new(&instance, config.seed);
        let best = grasp.multi_start(&config);
        info!("alpha {alpha:.1}: profit {}", best.total_profit);
        records.push(ExperimentRecord::from_solution(&name, &best));
    }

    if let Some(best) = records.iter().max_by_key(|r| r.profit) {
        info!("best alpha setting: {} with profit {}", best.method, best.profit);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;

    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "dckp-driver-{}-{tag}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn write(&self, relative: &str, contents: &str) -> PathBuf {
            let path = self.root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            let mut file = File::create(&path).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            path
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    const SMALL_INSTANCE: &str = "3 10 1\n10 9 8\n5 5 5\n1 2\n";

    #[test]
    fn test_run_single_produces_all_methods() {
        let tree = TempTree::new("single");
        let path = tree.write("inst1", SMALL_INSTANCE);

        let records = run_single(&path).unwrap();
        let methods: Vec<&str> = records.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(
            methods,
            vec![
                "Greedy_MaxProfit",
                "Greedy_MinWeight",
                "Greedy_MaxProfitWeight",
                "Greedy_MinConflicts",
                "GRASP_100_0.3",
                "HillClimbing",
                "VND",
            ]
        );
        assert!(records.iter().all(|r| r.feasible));
        assert!(records.iter().all(|r| r.instance == "inst1"));
    }

    #[test]
    fn test_run_single_missing_file_errors() {
        let result = run_single("/nonexistent/dckp/instance");
        assert!(matches!(result, Err(ExperimentError::Instance(_))));
    }

    #[test]
    fn test_collect_instances_filters_and_sorts() {
        let tree = TempTree::new("collect");
        tree.write("b-instance", SMALL_INSTANCE);
        tree.write("nested/a-instance", SMALL_INSTANCE);
        tree.write(".hidden", SMALL_INSTANCE);
        tree.write("results.csv", "Instance,Method\n");

        let files = collect_instances(&tree.root).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["b-instance", "a-instance"]);
    }

    #[test]
    fn test_batch_constructive_record_count() {
        let tree = TempTree::new("etapa1");
        tree.write("inst1", SMALL_INSTANCE);

        let records = run_batch(&tree.root, BatchPhase::Constructive).unwrap();
        // Four greedy strategies plus GRASP.
        assert_eq!(records.len(), 5);
        assert!(!records.iter().any(|r| r.method == "VND"));
    }

    #[test]
    fn test_batch_local_search_record_count() {
        let tree = TempTree::new("etapa2");
        tree.write("inst1", SMALL_INSTANCE);

        let records = run_batch(&tree.root, BatchPhase::LocalSearch).unwrap();
        let methods: Vec<&str> = records.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, vec!["GRASP_100_0.3", "HillClimbing", "VND"]);
    }

    #[test]
    fn test_batch_skips_unloadable_instance() {
        let tree = TempTree::new("skip");
        tree.write("bad", "0 0 0");
        tree.write("good", SMALL_INSTANCE);

        let records = run_batch(&tree.root, BatchPhase::Constructive).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.instance == "good"));
    }

    #[test]
    fn test_local_searches_not_chained() {
        // HC and VND are both seeded from the same GRASP solution, so
        // each must reach at least the GRASP profit independently.
        let tree = TempTree::new("seeding");
        let path = tree.write("inst1", SMALL_INSTANCE);

        let records = run_single(&path).unwrap();
        let grasp = records.iter().find(|r| r.method.starts_with("GRASP")).unwrap();
        let hc = records.iter().find(|r| r.method == "HillClimbing").unwrap();
        let vnd = records.iter().find(|r| r.method == "VND").unwrap();
        assert!(hc.profit >= grasp.profit);
        assert!(vnd.profit >= grasp.profit);
    }

    #[test]
    fn test_tune_alpha_sweeps_eleven_values() {
        let tree = TempTree::new("tune");
        let path = tree.write("inst1", SMALL_INSTANCE);

        let records = tune_alpha(&path, 5).unwrap();
        assert_eq!(records.len(), 11);
        assert_eq!(records[0].method, "GRASP_5_0");
        assert_eq!(records[3].method, "GRASP_5_0.3");
        assert_eq!(records[10].method, "GRASP_5_1");
    }
}
