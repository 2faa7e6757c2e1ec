//! Repository traits for guards, buildings, and shifts.
//!
//! The traits are object-safe and synchronous so callers can hold
//! `Arc<dyn GuardRepository>` (and friends) and swap implementations
//! without touching the call sites. The engine's scheduling and payroll
//! functions never see these traits; they take plain slices, and the
//! orchestration layer does the fetching.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Building, BuildingUpdate, Guard, GuardUpdate, Shift};

/// Storage operations for guards.
pub trait GuardRepository: Send + Sync {
    /// Stores a new guard under a freshly assigned id and returns the
    /// stored record. Any id on the input is replaced.
    ///
    /// Fails with `DuplicateEmail` when another guard already uses the
    /// email address.
    fn create(&self, guard: Guard) -> EngineResult<Guard>;

    /// Fetches a guard by id, or `GuardNotFound`.
    fn get(&self, guard_id: Uuid) -> EngineResult<Guard>;

    /// Returns all stored guards.
    fn get_all(&self) -> Vec<Guard>;

    /// Returns the guards whose status is `active`.
    fn get_active(&self) -> Vec<Guard>;

    /// Looks up a guard by email address.
    fn find_by_email(&self, email: &str) -> Option<Guard>;

    /// Applies the fields present in `update` to an existing guard and
    /// returns the updated record, or `GuardNotFound`.
    fn update(&self, guard_id: Uuid, update: &GuardUpdate) -> EngineResult<Guard>;

    /// Removes a guard, or `GuardNotFound`.
    fn delete(&self, guard_id: Uuid) -> EngineResult<()>;
}

/// Storage operations for buildings.
pub trait BuildingRepository: Send + Sync {
    /// Stores a new building under a freshly assigned id and returns the
    /// stored record. Any id on the input is replaced.
    fn create(&self, building: Building) -> EngineResult<Building>;

    /// Fetches a building by id, or `BuildingNotFound`.
    fn get(&self, building_id: Uuid) -> EngineResult<Building>;

    /// Returns all stored buildings.
    fn get_all(&self) -> Vec<Building>;

    /// Applies the fields present in `update` to an existing building and
    /// returns the updated record, or `BuildingNotFound`.
    fn update(&self, building_id: Uuid, update: &BuildingUpdate) -> EngineResult<Building>;

    /// Removes a building, or `BuildingNotFound`.
    fn delete(&self, building_id: Uuid) -> EngineResult<()>;
}

/// Storage operations for shifts.
pub trait ShiftRepository: Send + Sync {
    /// Stores a new shift under a freshly assigned id and returns the
    /// stored record. Any id on the input is replaced.
    fn create(&self, shift: Shift) -> EngineResult<Shift>;

    /// Fetches a shift by id, or `ShiftNotFound`.
    fn get(&self, shift_id: Uuid) -> EngineResult<Shift>;

    /// Returns all stored shifts.
    fn get_all(&self) -> Vec<Shift>;

    /// Returns the shifts assigned to a guard.
    fn get_by_guard(&self, guard_id: Uuid) -> Vec<Shift>;

    /// Returns the shifts at a building.
    fn get_by_building(&self, building_id: Uuid) -> Vec<Shift>;

    /// Returns a guard's shifts whose start date falls in the inclusive
    /// date range.
    fn get_in_range(
        &self,
        guard_id: Uuid,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Vec<Shift>;

    /// Sets a shift's confirmation flag and returns the updated record,
    /// or `ShiftNotFound`.
    fn update_confirmation(&self, shift_id: Uuid, is_confirmed: bool) -> EngineResult<Shift>;

    /// Moves a shift to a different guard and returns the updated record,
    /// or `ShiftNotFound`.
    fn reassign(&self, shift_id: Uuid, guard_id: Uuid) -> EngineResult<Shift>;

    /// Removes a shift, or `ShiftNotFound`.
    fn delete(&self, shift_id: Uuid) -> EngineResult<()>;
}
