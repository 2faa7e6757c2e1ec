//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::storage::{
    BuildingRepository, GuardRepository, InMemoryBuildingRepository, InMemoryGuardRepository,
    InMemoryShiftRepository, ShiftRepository,
};

/// Shared application state.
///
/// Holds the engine configuration and the repositories every handler
/// works against. Repositories are trait objects so tests and future
/// storage backends can swap implementations.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<EngineConfig>,
    /// Guard storage.
    guards: Arc<dyn GuardRepository>,
    /// Building storage.
    buildings: Arc<dyn BuildingRepository>,
    /// Shift storage.
    shifts: Arc<dyn ShiftRepository>,
}

impl AppState {
    /// Creates application state backed by empty in-memory repositories.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_repositories(
            config,
            Arc::new(InMemoryGuardRepository::new()),
            Arc::new(InMemoryBuildingRepository::new()),
            Arc::new(InMemoryShiftRepository::new()),
        )
    }

    /// Creates application state over the given repositories.
    pub fn with_repositories(
        config: EngineConfig,
        guards: Arc<dyn GuardRepository>,
        buildings: Arc<dyn BuildingRepository>,
        shifts: Arc<dyn ShiftRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            guards,
            buildings,
            shifts,
        }
    }

    /// Returns a reference to the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the guard repository.
    pub fn guards(&self) -> &dyn GuardRepository {
        self.guards.as_ref()
    }

    /// Returns the building repository.
    pub fn buildings(&self) -> &dyn BuildingRepository {
        self.buildings.as_ref()
    }

    /// Returns the shift repository.
    pub fn shifts(&self) -> &dyn ShiftRepository {
        self.shifts.as_ref()
    }
}
