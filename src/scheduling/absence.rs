//! Absence replacement resolution.
//!
//! When an assigned guard reports absent, a replacement is found by
//! re-running the assignment scorer with the absent guard excluded.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::config::SchedulingConfig;
use crate::models::{Building, Guard, Shift};

use super::scoring::{SelectedCandidate, select_best_guard};

/// Finds a replacement for an absent guard on a shift.
///
/// The absent guard is filtered out of the pool and the remaining
/// candidates are scored for the shift's building and start time exactly as
/// in [`select_best_guard`]. The resolver does not commit anything: callers
/// decide whether to reassign the shift to the returned candidate.
///
/// # Arguments
///
/// * `absent_guard_id` - The guard unable to work the shift
/// * `shift` - The shift needing cover
/// * `candidate_pool` - Guards considered as replacements
/// * `building` - The building the shift covers
/// * `history` - Existing shifts of all guards
/// * `reference_time` - The instant the recency window is measured from
/// * `config` - Scoring and rest knobs
///
/// # Returns
///
/// The replacement candidate and score, or `None` when nobody qualifies.
pub fn resolve_absence<'a>(
    absent_guard_id: Uuid,
    shift: &Shift,
    candidate_pool: &'a [Guard],
    building: &Building,
    history: &[Shift],
    reference_time: NaiveDateTime,
    config: &SchedulingConfig,
) -> Option<SelectedCandidate<'a>> {
    let remaining = candidate_pool
        .iter()
        .filter(|guard| guard.id != absent_guard_id);

    select_best_guard(
        remaining,
        building,
        shift.start_datetime,
        history,
        reference_time,
        config,
    )
}
