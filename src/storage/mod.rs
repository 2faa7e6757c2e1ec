//! Persistence abstraction for the engine's entities.
//!
//! Repositories are the capability set the orchestration layer works
//! against: create, fetch, filtered queries, allow-listed updates, and
//! deletes. The in-memory implementations back the HTTP service and the
//! test suites; a database-backed implementation would slot in behind
//! the same traits.

mod memory;
mod repository;

pub use memory::{InMemoryBuildingRepository, InMemoryGuardRepository, InMemoryShiftRepository};
pub use repository::{BuildingRepository, GuardRepository, ShiftRepository};
