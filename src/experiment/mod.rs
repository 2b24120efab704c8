//! Experiment orchestration.
//!
//! Feeds instances from disk through the constructive and local-search
//! layers and emits one [`ExperimentRecord`] per (instance, method)
//! pair. Batch modes walk a directory tree; a per-instance load failure
//! is logged and skipped, and only fatal I/O stops a batch. Records
//! serialise to CSV with the header
//! `Instance,Method,Profit,Weight,NumItems,Time,Feasible`.

mod driver;
mod record;

pub use driver::{
    collect_instances, run_batch, run_single, tune_alpha, BatchPhase, ExperimentError,
};
pub use record::{write_csv, ExperimentRecord};
