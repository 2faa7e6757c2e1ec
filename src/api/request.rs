//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the entity,
//! assignment, and payroll endpoints.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{Building, EntityStatus, Guard, RateSchedule, Shift, ShiftCategory};

/// Request body for `POST /guards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuardRequest {
    /// The guard's first name.
    pub first_name: String,
    /// The guard's last name.
    pub last_name: String,
    /// Contact email address, unique across guards.
    pub email: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Skills the guard holds.
    #[serde(default)]
    pub skills: HashSet<String>,
    /// Certifications the guard holds.
    #[serde(default)]
    pub certifications: HashSet<String>,
    /// First day of the contract (inclusive).
    pub contract_start: NaiveDate,
    /// Last day of the contract (inclusive).
    pub contract_end: NaiveDate,
    /// Hire date; defaults to the creation date when omitted.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// Request body for `POST /buildings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBuildingRequest {
    /// Display name of the building.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Skills a guard should hold to cover this building.
    #[serde(default)]
    pub security_requirements: HashSet<String>,
    /// Rate paid for normal hours.
    pub hourly_rate: Decimal,
    /// Rate paid for overtime hours; defaults to 1.5x hourly.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Rate paid for holiday hours; defaults to 2.0x hourly.
    #[serde(default)]
    pub holiday_rate: Option<Decimal>,
}

/// Request body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The guard assigned to the shift.
    pub guard_id: Uuid,
    /// The building the shift covers.
    pub building_id: Uuid,
    /// When the shift starts.
    pub start_datetime: NaiveDateTime,
    /// When the shift ends.
    pub end_datetime: NaiveDateTime,
    /// Declared shift category; defaults to `normal`.
    #[serde(default)]
    pub shift_type: ShiftCategory,
}

/// Request body for `POST /assignments/recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// The building needing coverage.
    pub building_id: Uuid,
    /// When the proposed shift starts.
    pub shift_start: NaiveDateTime,
    /// Evaluation time for rest and recency checks; defaults to the
    /// current UTC time when omitted.
    #[serde(default)]
    pub reference_time: Option<NaiveDateTime>,
}

/// Request body for `POST /assignments/absence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceRequest {
    /// The shift whose assigned guard is absent.
    pub shift_id: Uuid,
    /// Evaluation time for rest and recency checks; defaults to the
    /// current UTC time when omitted.
    #[serde(default)]
    pub reference_time: Option<NaiveDateTime>,
    /// When true, the selected replacement is committed onto the shift.
    #[serde(default)]
    pub reassign: bool,
}

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The guard to aggregate payroll for.
    pub guard_id: Uuid,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
}

/// Query parameters for `GET /shifts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftListQuery {
    /// Restrict to shifts assigned to this guard.
    #[serde(default)]
    pub guard_id: Option<Uuid>,
    /// Restrict to shifts at this building.
    #[serde(default)]
    pub building_id: Option<Uuid>,
}

impl From<CreateGuardRequest> for Guard {
    fn from(req: CreateGuardRequest) -> Self {
        let hire_date = req.hire_date.unwrap_or_else(|| Utc::now().date_naive());
        Guard {
            // Replaced by the repository on create.
            id: Uuid::nil(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            skills: req.skills,
            certifications: req.certifications,
            status: EntityStatus::Active,
            contract_start: req.contract_start,
            contract_end: req.contract_end,
            hire_date,
        }
    }
}

impl From<CreateBuildingRequest> for Building {
    fn from(req: CreateBuildingRequest) -> Self {
        let rates = RateSchedule::with_defaults(req.hourly_rate, req.overtime_rate, req.holiday_rate);
        Building {
            id: Uuid::nil(),
            name: req.name,
            address: req.address,
            security_requirements: req.security_requirements,
            hourly_rate: rates.hourly_rate,
            overtime_rate: rates.overtime_rate,
            holiday_rate: rates.holiday_rate,
            status: EntityStatus::Active,
        }
    }
}

impl From<CreateShiftRequest> for Shift {
    fn from(req: CreateShiftRequest) -> Self {
        Shift {
            id: Uuid::nil(),
            guard_id: req.guard_id,
            building_id: req.building_id,
            start_datetime: req.start_datetime,
            end_datetime: req.end_datetime,
            shift_type: req.shift_type,
            is_confirmed: false,
        }
    }
}
