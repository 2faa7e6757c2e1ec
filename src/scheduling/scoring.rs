//! Candidate scoring and selection.
//!
//! This module ranks candidate guards for a shift at a building and picks
//! the best one. Scoring is pure: it reads the supplied snapshots and
//! returns a selection without touching storage or the clock.

use chrono::{Duration, NaiveDateTime};

use crate::config::SchedulingConfig;
use crate::models::{Building, Guard, Shift};

/// A candidate chosen by [`select_best_guard`], together with the score
/// that won the selection.
#[derive(Debug, Clone)]
pub struct SelectedCandidate<'a> {
    /// The selected guard.
    pub guard: &'a Guard,
    /// The score the guard was selected with.
    pub score: i64,
}

/// Selects the best guard for a shift at a building.
///
/// Candidates are evaluated in the order supplied:
///
/// 1. Candidates not available for the shift start (wrong status or outside
///    their contract window) are skipped.
/// 2. Each skill matching one of the building's security requirements adds
///    `skill_match_weight` to the score.
/// 3. The candidate's most recent shift in `history` (greatest end time)
///    gates on rest: if the proposed start is less than
///    `minimum_rest_hours` after that end, the candidate is skipped;
///    clearing the gate adds `rested_bonus`. Candidates with no history
///    neither gain the bonus nor get rejected.
/// 4. Each of the candidate's shifts starting inside the last
///    `recent_shift_window_days` before `reference_time` subtracts one
///    point, spreading load away from recently worked guards.
///
/// The highest score wins; on a tie the earliest-evaluated candidate is
/// kept.
///
/// # Arguments
///
/// * `candidates` - Candidate pool, evaluated in iteration order
/// * `building` - The building whose requirements are matched
/// * `shift_start` - Start of the shift being staffed
/// * `history` - Existing shifts of all guards, in any order
/// * `reference_time` - The instant the recency window is measured from
/// * `config` - Scoring and rest knobs
///
/// # Returns
///
/// The selected candidate and score, or `None` when the pool is empty or
/// every candidate was skipped.
pub fn select_best_guard<'a, I>(
    candidates: I,
    building: &Building,
    shift_start: NaiveDateTime,
    history: &[Shift],
    reference_time: NaiveDateTime,
    config: &SchedulingConfig,
) -> Option<SelectedCandidate<'a>>
where
    I: IntoIterator<Item = &'a Guard>,
{
    let mut best: Option<SelectedCandidate<'a>> = None;

    for candidate in candidates {
        if !candidate.is_available_for_shift(shift_start) {
            continue;
        }

        let Some(score) = score_candidate(
            candidate,
            building,
            shift_start,
            history,
            reference_time,
            config,
        ) else {
            continue;
        };

        // Strictly-greater comparison keeps the first candidate on ties.
        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(SelectedCandidate {
                guard: candidate,
                score,
            });
        }
    }

    best
}

/// Scores one candidate, or returns `None` when the rest gate rejects them.
fn score_candidate(
    candidate: &Guard,
    building: &Building,
    shift_start: NaiveDateTime,
    history: &[Shift],
    reference_time: NaiveDateTime,
    config: &SchedulingConfig,
) -> Option<i64> {
    let matching_skills = building
        .security_requirements
        .intersection(&candidate.skills)
        .count() as i64;
    let mut score = config.skill_match_weight * matching_skills;

    // The rest gate is signed: a most recent shift ending after the
    // proposed start produces a negative gap and rejects the candidate.
    let last_shift_end = history
        .iter()
        .filter(|shift| shift.guard_id == candidate.id)
        .map(|shift| shift.end_datetime)
        .max();
    if let Some(last_end) = last_shift_end {
        if shift_start - last_end < Duration::hours(config.minimum_rest_hours) {
            return None;
        }
        score += config.rested_bonus;
    }

    let window_start = reference_time - Duration::days(config.recent_shift_window_days);
    let recent_shifts = history
        .iter()
        .filter(|shift| shift.guard_id == candidate.id && shift.start_datetime >= window_start)
        .count() as i64;
    score -= recent_shifts;

    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityStatus, ShiftCategory};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_guard(id: u128, skills: &[&str]) -> Guard {
        Guard {
            id: Uuid::from_u128(id),
            first_name: format!("Guard{}", id),
            last_name: "Test".to_string(),
            email: format!("guard{}@example.com", id),
            phone: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            certifications: HashSet::new(),
            status: EntityStatus::Active,
            contract_start: make_date("2026-01-01"),
            contract_end: make_date("2026-12-31"),
            hire_date: make_date("2026-01-01"),
        }
    }

    fn make_building(requirements: &[&str]) -> Building {
        Building {
            id: Uuid::from_u128(500),
            name: "Torre Norte".to_string(),
            address: "Av. Principal 120".to_string(),
            security_requirements: requirements.iter().map(|s| s.to_string()).collect(),
            hourly_rate: Decimal::new(10, 0),
            overtime_rate: Decimal::new(15, 0),
            holiday_rate: Decimal::new(20, 0),
            status: EntityStatus::Active,
        }
    }

    fn make_shift(guard: &Guard, start: NaiveDateTime, end: NaiveDateTime) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            guard_id: guard.id,
            building_id: Uuid::from_u128(500),
            start_datetime: start,
            end_datetime: end,
            shift_type: ShiftCategory::Normal,
            is_confirmed: true,
        }
    }

    fn config() -> SchedulingConfig {
        SchedulingConfig::default()
    }

    fn reference() -> NaiveDateTime {
        make_datetime("2026-03-10", "00:00:00")
    }

    // === Skill matching ===

    /// SC-001: higher skill overlap wins
    #[test]
    fn test_candidate_with_more_matching_skills_wins() {
        let a = make_guard(1, &["cctv"]);
        let b = make_guard(2, &["firearms", "cctv"]);
        let pool = vec![a, b];
        let building = make_building(&["firearms", "cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected = select_best_guard(&pool, &building, start, &[], reference(), &config())
            .expect("a candidate should be selected");

        assert_eq!(selected.guard.id, Uuid::from_u128(2));
        assert_eq!(selected.score, 20);
    }

    /// SC-002: skills outside the requirements do not score
    #[test]
    fn test_unrelated_skills_do_not_score() {
        let a = make_guard(1, &["driving", "first_aid"]);
        let pool = vec![a];
        let building = make_building(&["firearms"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &[], reference(), &config()).unwrap();

        assert_eq!(selected.score, 0);
    }

    // === Availability filtering ===

    /// SC-003: inactive candidates are skipped
    #[test]
    fn test_inactive_candidate_is_skipped() {
        let mut a = make_guard(1, &["firearms", "cctv"]);
        a.status = EntityStatus::Inactive;
        let b = make_guard(2, &["cctv"]);
        let pool = vec![a, b];
        let building = make_building(&["firearms", "cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &[], reference(), &config()).unwrap();

        assert_eq!(selected.guard.id, Uuid::from_u128(2));
    }

    /// SC-004: candidates outside their contract window are skipped
    #[test]
    fn test_candidate_outside_contract_is_skipped() {
        let mut a = make_guard(1, &["firearms", "cctv"]);
        a.contract_end = make_date("2026-02-28");
        let b = make_guard(2, &["cctv"]);
        let pool = vec![a, b];
        let building = make_building(&["firearms", "cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &[], reference(), &config()).unwrap();

        assert_eq!(selected.guard.id, Uuid::from_u128(2));
    }

    // === Rest gate ===

    /// SC-005: a recent shift ending under 12 hours before the start
    /// rejects the candidate
    #[test]
    fn test_candidate_without_enough_rest_is_rejected() {
        let a = make_guard(1, &["firearms", "cctv"]);
        let b = make_guard(2, &[]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-03-10", "14:00:00"),
            make_datetime("2026-03-10", "22:00:00"),
        )];
        let pool = vec![a, b];
        let building = make_building(&["firearms", "cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config()).unwrap();

        assert_eq!(selected.guard.id, Uuid::from_u128(2));
    }

    /// SC-006: clearing the rest gate earns the rested bonus
    #[test]
    fn test_rested_candidate_earns_bonus() {
        let a = make_guard(1, &["cctv"]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-03-07", "08:00:00"),
            make_datetime("2026-03-07", "16:00:00"),
        )];
        let pool = vec![a];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config()).unwrap();

        // 10 (skill) + 5 (rested) - 1 (one shift in the last 7 days)
        assert_eq!(selected.score, 14);
    }

    /// SC-007: the gate is signed, so a shift ending after the proposed
    /// start rejects even though the absolute gap is large
    #[test]
    fn test_shift_ending_after_start_rejects() {
        let a = make_guard(1, &["firearms", "cctv"]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-03-11", "06:00:00"),
            make_datetime("2026-03-12", "06:00:00"),
        )];
        let pool = vec![a];
        let building = make_building(&["firearms", "cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config());

        assert!(selected.is_none());
    }

    /// SC-008: no history means no bonus and no rejection
    #[test]
    fn test_candidate_without_history_gets_no_bonus() {
        let a = make_guard(1, &["cctv"]);
        let pool = vec![a];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &[], reference(), &config()).unwrap();

        assert_eq!(selected.score, 10);
    }

    // === Recency penalty ===

    /// SC-009: each shift inside the recency window costs one point
    #[test]
    fn test_recent_shifts_are_penalized() {
        let a = make_guard(1, &["cctv"]);
        let b = make_guard(2, &["cctv"]);
        let mut history = Vec::new();
        for day in 4..7 {
            history.push(make_shift(
                &a,
                make_datetime(&format!("2026-03-0{}", day), "08:00:00"),
                make_datetime(&format!("2026-03-0{}", day), "16:00:00"),
            ));
        }
        history.push(make_shift(
            &b,
            make_datetime("2026-03-06", "08:00:00"),
            make_datetime("2026-03-06", "16:00:00"),
        ));
        let pool = vec![a, b];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config()).unwrap();

        // a: 10 + 5 - 3 = 12; b: 10 + 5 - 1 = 14
        assert_eq!(selected.guard.id, Uuid::from_u128(2));
        assert_eq!(selected.score, 14);
    }

    /// SC-010: shifts older than the window are not penalized
    #[test]
    fn test_old_shifts_are_not_penalized() {
        let a = make_guard(1, &["cctv"]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-02-20", "08:00:00"),
            make_datetime("2026-02-20", "16:00:00"),
        )];
        let pool = vec![a];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config()).unwrap();

        // 10 (skill) + 5 (rested), no recency penalty
        assert_eq!(selected.score, 15);
    }

    /// SC-015: a shift starting after the reference instant still draws
    /// the penalty
    #[test]
    fn test_shift_starting_after_reference_is_penalized() {
        let a = make_guard(1, &["cctv"]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-03-10", "02:00:00"),
            make_datetime("2026-03-10", "06:00:00"),
        )];
        let pool = vec![a];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config()).unwrap();

        // 10 (skill) + 5 (rested, 26 hours clear) - 1: the window has no
        // upper cutoff at the reference instant
        assert_eq!(selected.score, 14);
    }

    // === Tie-breaking and empty outcomes ===

    /// SC-011: ties keep the first-encountered candidate
    #[test]
    fn test_tie_keeps_first_candidate() {
        let a = make_guard(1, &["cctv"]);
        let b = make_guard(2, &["cctv"]);
        let pool = vec![a, b];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &[], reference(), &config()).unwrap();

        assert_eq!(selected.guard.id, Uuid::from_u128(1));
    }

    /// SC-012: empty pool yields none
    #[test]
    fn test_empty_pool_yields_none() {
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected: Option<SelectedCandidate> =
            select_best_guard(&[], &building, start, &[], reference(), &config());

        assert!(selected.is_none());
    }

    /// SC-013: a pool where every candidate is rejected yields none
    #[test]
    fn test_fully_rejected_pool_yields_none() {
        let mut a = make_guard(1, &["cctv"]);
        a.status = EntityStatus::OnLeave;
        let b = make_guard(2, &["cctv"]);
        let history = vec![make_shift(
            &b,
            make_datetime("2026-03-11", "00:00:00"),
            make_datetime("2026-03-11", "06:00:00"),
        )];
        let pool = vec![a, b];
        let building = make_building(&["cctv"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &config());

        assert!(selected.is_none());
    }

    /// SC-014: a negative total score still selects when it is the best
    #[test]
    fn test_negative_score_can_still_win() {
        let a = make_guard(1, &[]);
        let history = vec![make_shift(
            &a,
            make_datetime("2026-03-08", "08:00:00"),
            make_datetime("2026-03-08", "16:00:00"),
        )];
        let pool = vec![a];
        let building = make_building(&["firearms"]);
        let start = make_datetime("2026-03-11", "08:00:00");

        let mut cfg = config();
        cfg.rested_bonus = 0;

        let selected =
            select_best_guard(&pool, &building, start, &history, reference(), &cfg).unwrap();

        assert_eq!(selected.score, -1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_status() -> impl Strategy<Value = EntityStatus> {
            prop_oneof![
                Just(EntityStatus::Active),
                Just(EntityStatus::Inactive),
                Just(EntityStatus::OnLeave),
            ]
        }

        fn arbitrary_pool() -> impl Strategy<Value = Vec<Guard>> {
            proptest::collection::vec((arbitrary_status(), -60i64..60, 0i64..120), 0..8).prop_map(
                |entries| {
                    entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, (status, start_offset, length))| {
                            let contract_start =
                                make_date("2026-03-01") + Duration::days(start_offset);
                            let mut guard = make_guard(index as u128 + 1, &["cctv"]);
                            guard.status = status;
                            guard.contract_start = contract_start;
                            guard.contract_end = contract_start + Duration::days(length);
                            guard
                        })
                        .collect()
                },
            )
        }

        proptest! {
            /// The scorer never selects a candidate that is not available
            /// for the shift start.
            #[test]
            fn never_selects_unavailable_candidate(pool in arbitrary_pool()) {
                let building = make_building(&["cctv"]);
                let start = make_datetime("2026-03-11", "08:00:00");

                let selected =
                    select_best_guard(&pool, &building, start, &[], reference(), &config());

                if let Some(selected) = selected {
                    prop_assert!(selected.guard.is_available_for_shift(start));
                }
            }

            /// Identical candidates always resolve to the first one.
            #[test]
            fn identical_candidates_select_first(count in 1usize..10) {
                let pool: Vec<Guard> = (0..count)
                    .map(|index| make_guard(index as u128 + 1, &["cctv"]))
                    .collect();
                let building = make_building(&["cctv"]);
                let start = make_datetime("2026-03-11", "08:00:00");

                let selected =
                    select_best_guard(&pool, &building, start, &[], reference(), &config())
                        .unwrap();

                prop_assert_eq!(selected.guard.id, pool[0].id);
            }
        }
    }
}
