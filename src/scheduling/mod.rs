//! Shift assignment core: candidate scoring, rest validation, and absence
//! replacement.
//!
//! Every function in this module is a pure computation over the snapshots
//! passed in. Nothing here reads the clock, touches storage, or logs;
//! callers supply the reference time explicitly.

mod absence;
mod rest;
mod scoring;

pub use absence::resolve_absence;
pub use rest::has_sufficient_rest;
pub use scoring::{SelectedCandidate, select_best_guard};
