//! Variable Neighbourhood Descent.
//!
//! Deterministic descent over the three DCKP neighbourhoods in order of
//! increasing cost: Add/Drop, Swap(1-1), Swap(2-1). Each step takes the
//! best strictly improving neighbour of the current structure; on
//! improvement the schedule restarts at the cheapest neighbourhood,
//! otherwise it escalates to the next. The search stops once all three
//! structures are clean or the iteration cap is hit.
//!
//! # References
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod runner;

pub use config::VndConfig;
pub use runner::Vnd;
