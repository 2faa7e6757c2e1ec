//! Guard model and lifecycle status.
//!
//! This module contains the [`Guard`] type representing a schedulable
//! security guard, the shared [`EntityStatus`] lifecycle enum, and the
//! [`GuardUpdate`] structure listing the fields that may be changed after
//! creation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Lifecycle status of a guard or building.
///
/// Only `active` entities participate in scheduling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// The entity is operational and schedulable.
    Active,
    /// The entity has been deactivated.
    Inactive,
    /// The entity is temporarily unavailable.
    OnLeave,
}

/// A security guard available for shift assignment.
///
/// Guards carry the skill and certification sets matched against building
/// requirements by the assignment scorer, plus the contract window that
/// bounds their eligibility.
///
/// # Example
///
/// ```
/// use roster_engine::models::{EntityStatus, Guard};
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
/// use uuid::Uuid;
///
/// let guard = Guard {
///     id: Uuid::new_v4(),
///     first_name: "Ana".to_string(),
///     last_name: "Reyes".to_string(),
///     email: "ana.reyes@example.com".to_string(),
///     phone: None,
///     skills: HashSet::from(["cctv".to_string()]),
///     certifications: HashSet::new(),
///     status: EntityStatus::Active,
///     contract_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     contract_end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// assert_eq!(guard.full_name(), "Ana Reyes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    /// Unique identifier for the guard.
    pub id: Uuid,
    /// The guard's first name.
    pub first_name: String,
    /// The guard's last name.
    pub last_name: String,
    /// Contact email address, unique across guards.
    pub email: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Skills the guard holds (e.g., "cctv", "firearms").
    #[serde(default)]
    pub skills: HashSet<String>,
    /// Certifications the guard holds.
    #[serde(default)]
    pub certifications: HashSet<String>,
    /// Current lifecycle status.
    pub status: EntityStatus,
    /// First day of the guard's contract (inclusive).
    pub contract_start: NaiveDate,
    /// Last day of the guard's contract (inclusive).
    pub contract_end: NaiveDate,
    /// The date the guard was hired.
    pub hire_date: NaiveDate,
}

impl Guard {
    /// Returns the guard's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks whether the guard can be assigned a shift starting at the
    /// given time.
    ///
    /// A guard is available only when their status is `active` and the
    /// shift's start date falls within the contract window (both ends
    /// inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{EntityStatus, Guard};
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use std::collections::HashSet;
    /// use uuid::Uuid;
    ///
    /// let guard = Guard {
    ///     id: Uuid::new_v4(),
    ///     first_name: "Ana".to_string(),
    ///     last_name: "Reyes".to_string(),
    ///     email: "ana.reyes@example.com".to_string(),
    ///     phone: None,
    ///     skills: HashSet::new(),
    ///     certifications: HashSet::new(),
    ///     status: EntityStatus::Active,
    ///     contract_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     contract_end: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    ///     hire_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    /// };
    ///
    /// let inside = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
    /// let outside = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
    /// assert!(guard.is_available_for_shift(inside));
    /// assert!(!guard.is_available_for_shift(outside));
    /// ```
    pub fn is_available_for_shift(&self, shift_start: NaiveDateTime) -> bool {
        let start_date = shift_start.date();
        self.status == EntityStatus::Active
            && self.contract_start <= start_date
            && start_date <= self.contract_end
    }
}

/// The set of guard fields that may be changed after creation.
///
/// Every field is optional; only fields present in the update are applied.
/// The email address is identity and cannot be changed through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardUpdate {
    /// New first name, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New phone number, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Replacement skill set, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<HashSet<String>>,
    /// Replacement certification set, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<HashSet<String>>,
    /// New lifecycle status, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    /// New contract start date, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_start: Option<NaiveDate>,
    /// New contract end date, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_guard(status: EntityStatus) -> Guard {
        Guard {
            id: Uuid::from_u128(1),
            first_name: "Carlos".to_string(),
            last_name: "Mendoza".to_string(),
            email: "carlos.mendoza@example.com".to_string(),
            phone: Some("+34 600 000 001".to_string()),
            skills: HashSet::from(["cctv".to_string(), "first_aid".to_string()]),
            certifications: HashSet::from(["tip".to_string()]),
            status,
            contract_start: make_date("2026-01-01"),
            contract_end: make_date("2026-12-31"),
            hire_date: make_date("2025-06-15"),
        }
    }

    /// GD-001: active guard inside contract window is available
    #[test]
    fn test_active_guard_inside_contract_is_available() {
        let guard = make_guard(EntityStatus::Active);
        assert!(guard.is_available_for_shift(make_datetime("2026-06-15", "08:00:00")));
    }

    /// GD-002: inactive guard is never available
    #[test]
    fn test_inactive_guard_is_not_available() {
        let guard = make_guard(EntityStatus::Inactive);
        assert!(!guard.is_available_for_shift(make_datetime("2026-06-15", "08:00:00")));
    }

    /// GD-003: on-leave guard is never available
    #[test]
    fn test_on_leave_guard_is_not_available() {
        let guard = make_guard(EntityStatus::OnLeave);
        assert!(!guard.is_available_for_shift(make_datetime("2026-06-15", "08:00:00")));
    }

    /// GD-004: shift before contract start is rejected
    #[test]
    fn test_shift_before_contract_start_is_rejected() {
        let guard = make_guard(EntityStatus::Active);
        assert!(!guard.is_available_for_shift(make_datetime("2025-12-31", "22:00:00")));
    }

    /// GD-005: shift after contract end is rejected
    #[test]
    fn test_shift_after_contract_end_is_rejected() {
        let guard = make_guard(EntityStatus::Active);
        assert!(!guard.is_available_for_shift(make_datetime("2027-01-01", "00:00:00")));
    }

    /// GD-006: contract boundary dates are inclusive
    #[test]
    fn test_contract_boundaries_are_inclusive() {
        let guard = make_guard(EntityStatus::Active);
        assert!(guard.is_available_for_shift(make_datetime("2026-01-01", "00:00:00")));
        assert!(guard.is_available_for_shift(make_datetime("2026-12-31", "23:59:00")));
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        let guard = make_guard(EntityStatus::Active);
        assert_eq!(guard.full_name(), "Carlos Mendoza");
    }

    #[test]
    fn test_deserialize_status_snake_case() {
        let active: EntityStatus = serde_json::from_str("\"active\"").unwrap();
        let inactive: EntityStatus = serde_json::from_str("\"inactive\"").unwrap();
        let on_leave: EntityStatus = serde_json::from_str("\"on_leave\"").unwrap();
        assert_eq!(active, EntityStatus::Active);
        assert_eq!(inactive, EntityStatus::Inactive);
        assert_eq!(on_leave, EntityStatus::OnLeave);
    }

    #[test]
    fn test_serialize_status_snake_case() {
        let json = serde_json::to_string(&EntityStatus::OnLeave).unwrap();
        assert_eq!(json, "\"on_leave\"");
    }

    #[test]
    fn test_deserialize_guard_from_json() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "first_name": "Lucia",
            "last_name": "Ortega",
            "email": "lucia.ortega@example.com",
            "skills": ["firearms", "cctv"],
            "status": "active",
            "contract_start": "2026-01-01",
            "contract_end": "2026-12-31",
            "hire_date": "2026-01-01"
        }"#;

        let guard: Guard = serde_json::from_str(json).unwrap();
        assert_eq!(guard.id, Uuid::from_u128(1));
        assert_eq!(guard.email, "lucia.ortega@example.com");
        assert!(guard.skills.contains("firearms"));
        assert!(guard.certifications.is_empty());
        assert_eq!(guard.phone, None);
        assert_eq!(guard.status, EntityStatus::Active);
    }

    #[test]
    fn test_deserialize_partial_guard_update() {
        let json = r#"{"status": "on_leave", "skills": ["patrol"]}"#;
        let update: GuardUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.status, Some(EntityStatus::OnLeave));
        assert_eq!(update.skills, Some(HashSet::from(["patrol".to_string()])));
        assert!(update.first_name.is_none());
        assert!(update.contract_end.is_none());
    }

    #[test]
    fn test_guard_serialization_round_trip() {
        let guard = make_guard(EntityStatus::Active);
        let json = serde_json::to_string(&guard).unwrap();
        let back: Guard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guard);
    }
}
