//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod building;
mod guard;
mod payment;
mod shift;

pub use building::{Building, BuildingUpdate, RateSchedule};
pub use guard::{EntityStatus, Guard, GuardUpdate};
pub use payment::{HoursBreakdown, PayrollSummary};
pub use shift::{Shift, ShiftCategory};
