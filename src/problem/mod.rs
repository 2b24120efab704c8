//! DCKP problem model.
//!
//! Holds the immutable problem [`Instance`] (item profits, weights,
//! knapsack capacity and the pairwise conflict graph), the mutable
//! [`Solution`] working set with cached aggregates, and the
//! [`Validator`] that independently recomputes those aggregates.
//!
//! Construction and neighbourhood generation maintain profit and weight
//! incrementally for speed; the validator provides the authoritative
//! recomputation path so drift in the incremental bookkeeping is
//! detectable.

mod instance;
mod reader;
mod solution;
mod validator;

pub use instance::Instance;
pub use reader::InstanceError;
pub use solution::Solution;
pub use validator::Validator;
