//! Rest-time validation.
//!
//! This module provides the minimum-rest predicate used before committing a
//! new shift. It is a pure function: it never fails and logs nothing.

use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::models::Shift;

/// Checks whether a guard would keep the minimum rest separation if a new
/// shift started at `candidate_start`.
///
/// For every existing shift belonging to `guard_id`, the absolute gap
/// between the existing shift's end and `candidate_start` must be at least
/// `minimum_rest_hours`. A gap below the threshold in either direction
/// fails, which also rejects overlapping shifts. Shifts belonging to other
/// guards are ignored, and an empty history always passes.
///
/// # Arguments
///
/// * `guard_id` - The guard being scheduled
/// * `candidate_start` - Start of the proposed new shift
/// * `existing_shifts` - Shift history to check against, in any order
/// * `minimum_rest_hours` - Required rest separation in hours
///
/// # Returns
///
/// `true` when every existing shift of the guard clears the threshold.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Shift, ShiftCategory};
/// use roster_engine::scheduling::has_sufficient_rest;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let guard_id = Uuid::new_v4();
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let existing = vec![Shift {
///     id: Uuid::new_v4(),
///     guard_id,
///     building_id: Uuid::new_v4(),
///     start_datetime: monday.and_hms_opt(12, 0, 0).unwrap(),
///     end_datetime: monday.and_hms_opt(20, 0, 0).unwrap(),
///     shift_type: ShiftCategory::Normal,
///     is_confirmed: true,
/// }];
///
/// // 10 hours after the existing shift ends: too soon.
/// let tuesday_morning = monday.succ_opt().unwrap().and_hms_opt(6, 0, 0).unwrap();
/// assert!(!has_sufficient_rest(guard_id, tuesday_morning, &existing, 12));
///
/// // 16 hours after: enough rest.
/// let tuesday_noon = monday.succ_opt().unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert!(has_sufficient_rest(guard_id, tuesday_noon, &existing, 12));
/// ```
pub fn has_sufficient_rest(
    guard_id: Uuid,
    candidate_start: NaiveDateTime,
    existing_shifts: &[Shift],
    minimum_rest_hours: i64,
) -> bool {
    let minimum_gap = Duration::hours(minimum_rest_hours);

    existing_shifts
        .iter()
        .filter(|shift| shift.guard_id == guard_id)
        .all(|shift| (candidate_start - shift.end_datetime).abs() >= minimum_gap)
}
