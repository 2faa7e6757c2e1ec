//! In-memory repository implementations.
//!
//! Each repository is a `parking_lot::RwLock` over a `HashMap` keyed by
//! id. Reads take the shared lock and return clones, so callers hold a
//! snapshot and never a live reference into the store.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use super::repository::{BuildingRepository, GuardRepository, ShiftRepository};
use crate::error::{EngineError, EngineResult};
use crate::models::{Building, BuildingUpdate, EntityStatus, Guard, GuardUpdate, Shift};

/// In-memory guard store.
#[derive(Debug, Default)]
pub struct InMemoryGuardRepository {
    guards: RwLock<HashMap<Uuid, Guard>>,
}

impl InMemoryGuardRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuardRepository for InMemoryGuardRepository {
    fn create(&self, mut guard: Guard) -> EngineResult<Guard> {
        let mut guards = self.guards.write();

        // Uniqueness check and insert under one write lock.
        if guards.values().any(|existing| existing.email == guard.email) {
            return Err(EngineError::DuplicateEmail {
                email: guard.email.clone(),
            });
        }

        guard.id = Uuid::new_v4();
        tracing::debug!(guard_id = %guard.id, email = %guard.email, "guard created");
        guards.insert(guard.id, guard.clone());
        Ok(guard)
    }

    fn get(&self, guard_id: Uuid) -> EngineResult<Guard> {
        self.guards
            .read()
            .get(&guard_id)
            .cloned()
            .ok_or(EngineError::GuardNotFound { guard_id })
    }

    fn get_all(&self) -> Vec<Guard> {
        self.guards.read().values().cloned().collect()
    }

    fn get_active(&self) -> Vec<Guard> {
        self.guards
            .read()
            .values()
            .filter(|guard| guard.status == EntityStatus::Active)
            .cloned()
            .collect()
    }

    fn find_by_email(&self, email: &str) -> Option<Guard> {
        self.guards
            .read()
            .values()
            .find(|guard| guard.email == email)
            .cloned()
    }

    fn update(&self, guard_id: Uuid, update: &GuardUpdate) -> EngineResult<Guard> {
        let mut guards = self.guards.write();
        let guard = guards
            .get_mut(&guard_id)
            .ok_or(EngineError::GuardNotFound { guard_id })?;

        if let Some(first_name) = &update.first_name {
            guard.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            guard.last_name = last_name.clone();
        }
        if let Some(phone) = &update.phone {
            guard.phone = Some(phone.clone());
        }
        if let Some(skills) = &update.skills {
            guard.skills = skills.clone();
        }
        if let Some(certifications) = &update.certifications {
            guard.certifications = certifications.clone();
        }
        if let Some(status) = update.status {
            guard.status = status;
        }
        if let Some(contract_start) = update.contract_start {
            guard.contract_start = contract_start;
        }
        if let Some(contract_end) = update.contract_end {
            guard.contract_end = contract_end;
        }

        Ok(guard.clone())
    }

    fn delete(&self, guard_id: Uuid) -> EngineResult<()> {
        match self.guards.write().remove(&guard_id) {
            Some(_) => {
                tracing::debug!(guard_id = %guard_id, "guard deleted");
                Ok(())
            }
            None => Err(EngineError::GuardNotFound { guard_id }),
        }
    }
}

/// In-memory building store.
#[derive(Debug, Default)]
pub struct InMemoryBuildingRepository {
    buildings: RwLock<HashMap<Uuid, Building>>,
}

impl InMemoryBuildingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildingRepository for InMemoryBuildingRepository {
    fn create(&self, mut building: Building) -> EngineResult<Building> {
        building.id = Uuid::new_v4();
        tracing::debug!(building_id = %building.id, name = %building.name, "building created");
        self.buildings.write().insert(building.id, building.clone());
        Ok(building)
    }

    fn get(&self, building_id: Uuid) -> EngineResult<Building> {
        self.buildings
            .read()
            .get(&building_id)
            .cloned()
            .ok_or(EngineError::BuildingNotFound { building_id })
    }

    fn get_all(&self) -> Vec<Building> {
        self.buildings.read().values().cloned().collect()
    }

    fn update(&self, building_id: Uuid, update: &BuildingUpdate) -> EngineResult<Building> {
        let mut buildings = self.buildings.write();
        let building = buildings
            .get_mut(&building_id)
            .ok_or(EngineError::BuildingNotFound { building_id })?;

        if let Some(name) = &update.name {
            building.name = name.clone();
        }
        if let Some(address) = &update.address {
            building.address = address.clone();
        }
        if let Some(security_requirements) = &update.security_requirements {
            building.security_requirements = security_requirements.clone();
        }
        if let Some(hourly_rate) = update.hourly_rate {
            building.hourly_rate = hourly_rate;
        }
        if let Some(overtime_rate) = update.overtime_rate {
            building.overtime_rate = overtime_rate;
        }
        if let Some(holiday_rate) = update.holiday_rate {
            building.holiday_rate = holiday_rate;
        }
        if let Some(status) = update.status {
            building.status = status;
        }

        Ok(building.clone())
    }

    fn delete(&self, building_id: Uuid) -> EngineResult<()> {
        match self.buildings.write().remove(&building_id) {
            Some(_) => {
                tracing::debug!(building_id = %building_id, "building deleted");
                Ok(())
            }
            None => Err(EngineError::BuildingNotFound { building_id }),
        }
    }
}

/// In-memory shift store.
#[derive(Debug, Default)]
pub struct InMemoryShiftRepository {
    shifts: RwLock<HashMap<Uuid, Shift>>,
}

impl InMemoryShiftRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShiftRepository for InMemoryShiftRepository {
    fn create(&self, mut shift: Shift) -> EngineResult<Shift> {
        shift.id = Uuid::new_v4();
        tracing::debug!(
            shift_id = %shift.id,
            guard_id = %shift.guard_id,
            building_id = %shift.building_id,
            "shift created"
        );
        self.shifts.write().insert(shift.id, shift.clone());
        Ok(shift)
    }

    fn get(&self, shift_id: Uuid) -> EngineResult<Shift> {
        self.shifts
            .read()
            .get(&shift_id)
            .cloned()
            .ok_or(EngineError::ShiftNotFound { shift_id })
    }

    fn get_all(&self) -> Vec<Shift> {
        self.shifts.read().values().cloned().collect()
    }

    fn get_by_guard(&self, guard_id: Uuid) -> Vec<Shift> {
        self.shifts
            .read()
            .values()
            .filter(|shift| shift.guard_id == guard_id)
            .cloned()
            .collect()
    }

    fn get_by_building(&self, building_id: Uuid) -> Vec<Shift> {
        self.shifts
            .read()
            .values()
            .filter(|shift| shift.building_id == building_id)
            .cloned()
            .collect()
    }

    fn get_in_range(
        &self,
        guard_id: Uuid,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Vec<Shift> {
        self.shifts
            .read()
            .values()
            .filter(|shift| {
                let start_date = shift.start_date();
                shift.guard_id == guard_id
                    && period_start <= start_date
                    && start_date <= period_end
            })
            .cloned()
            .collect()
    }

    fn update_confirmation(&self, shift_id: Uuid, is_confirmed: bool) -> EngineResult<Shift> {
        let mut shifts = self.shifts.write();
        let shift = shifts
            .get_mut(&shift_id)
            .ok_or(EngineError::ShiftNotFound { shift_id })?;
        shift.is_confirmed = is_confirmed;
        Ok(shift.clone())
    }

    fn reassign(&self, shift_id: Uuid, guard_id: Uuid) -> EngineResult<Shift> {
        let mut shifts = self.shifts.write();
        let shift = shifts
            .get_mut(&shift_id)
            .ok_or(EngineError::ShiftNotFound { shift_id })?;
        tracing::debug!(shift_id = %shift_id, guard_id = %guard_id, "shift reassigned");
        shift.guard_id = guard_id;
        Ok(shift.clone())
    }

    fn delete(&self, shift_id: Uuid) -> EngineResult<()> {
        match self.shifts.write().remove(&shift_id) {
            Some(_) => {
                tracing::debug!(shift_id = %shift_id, "shift deleted");
                Ok(())
            }
            None => Err(EngineError::ShiftNotFound { shift_id }),
        }
    }
}
