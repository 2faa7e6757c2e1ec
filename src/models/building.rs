//! Building model and pay-rate schedule.
//!
//! This module contains the [`Building`] type representing a client site
//! that shifts are assigned to, the [`RateSchedule`] triple used by payroll
//! aggregation, and the [`BuildingUpdate`] allow-listed update structure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::guard::EntityStatus;

/// The three pay rates a building pays for worked hours.
///
/// Night hours have no stored rate of their own; the payroll aggregator
/// derives them from `hourly_rate` and the configured night multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Rate for normal hours.
    pub hourly_rate: Decimal,
    /// Rate for overtime hours.
    pub overtime_rate: Decimal,
    /// Rate for holiday hours.
    pub holiday_rate: Decimal,
}

impl RateSchedule {
    /// Builds a schedule from an hourly rate, filling in the overtime and
    /// holiday rates when they were not explicitly supplied.
    ///
    /// Missing rates default to 1.5x (overtime) and 2.0x (holiday) of the
    /// hourly rate.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::RateSchedule;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateSchedule::with_defaults(Decimal::new(10, 0), None, None);
    /// assert_eq!(rates.overtime_rate, Decimal::new(15, 0));
    /// assert_eq!(rates.holiday_rate, Decimal::new(20, 0));
    /// ```
    pub fn with_defaults(
        hourly_rate: Decimal,
        overtime_rate: Option<Decimal>,
        holiday_rate: Option<Decimal>,
    ) -> Self {
        Self {
            hourly_rate,
            overtime_rate: overtime_rate.unwrap_or(hourly_rate * Decimal::new(15, 1)),
            holiday_rate: holiday_rate.unwrap_or(hourly_rate * Decimal::new(2, 0)),
        }
    }

    /// A schedule with every rate set to zero.
    ///
    /// Used by the payroll aggregator when a shift references a building
    /// missing from the rate table.
    pub fn zero() -> Self {
        Self {
            hourly_rate: Decimal::ZERO,
            overtime_rate: Decimal::ZERO,
            holiday_rate: Decimal::ZERO,
        }
    }
}

/// A client building guarded by shift assignments.
///
/// Buildings declare the skill requirements that the assignment scorer
/// matches candidate guards against, plus the rates used by payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier for the building.
    pub id: Uuid,
    /// Display name of the building.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Skills a guard should hold to cover this building.
    #[serde(default)]
    pub security_requirements: HashSet<String>,
    /// Rate paid for normal hours.
    pub hourly_rate: Decimal,
    /// Rate paid for overtime hours.
    pub overtime_rate: Decimal,
    /// Rate paid for holiday hours.
    pub holiday_rate: Decimal,
    /// Current lifecycle status.
    pub status: EntityStatus,
}

impl Building {
    /// Returns the building's rates as a [`RateSchedule`] value.
    pub fn rate_schedule(&self) -> RateSchedule {
        RateSchedule {
            hourly_rate: self.hourly_rate,
            overtime_rate: self.overtime_rate,
            holiday_rate: self.holiday_rate,
        }
    }
}

/// The set of building fields that may be changed after creation.
///
/// Every field is optional; only fields present in the update are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingUpdate {
    /// New display name, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New address, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Replacement requirement set, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_requirements: Option<HashSet<String>>,
    /// New hourly rate, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// New overtime rate, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_rate: Option<Decimal>,
    /// New holiday rate, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_rate: Option<Decimal>,
    /// New lifecycle status, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
