//! Payroll aggregation across a guard's shifts.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::hours::classify_shift;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{Guard, HoursBreakdown, PayrollSummary, RateSchedule, Shift};

/// Computes a guard's payroll summary over a set of shifts.
///
/// Each shift is classified into an hour bucket and charged at the rate
/// schedule of its building: `normal` at the hourly rate, `overtime` and
/// `holiday` at their dedicated rates, and `night` at the hourly rate
/// times the configured multiplier.
///
/// A shift whose building is missing from `rate_table` contributes zero
/// payment. Its hours still count toward the breakdown and its id is
/// recorded in `defaulted_rate_shifts` so the caller can surface the
/// inconsistency.
///
/// # Arguments
///
/// * `guard` - The guard the summary is for
/// * `shifts` - The guard's shifts in the pay period
/// * `rate_table` - Rate schedules keyed by building id
/// * `config` - Classification and payroll knobs
///
/// # Returns
///
/// The aggregated summary, or the classifier's error if any shift has an
/// invalid span.
///
/// # Example
///
/// ```
/// use roster_engine::config::EngineConfig;
/// use roster_engine::models::{Guard, EntityStatus, RateSchedule, Shift, ShiftCategory};
/// use roster_engine::payroll::compute_payment;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::{HashMap, HashSet};
/// use uuid::Uuid;
///
/// let guard = Guard {
///     id: Uuid::new_v4(),
///     first_name: "Dana".to_string(),
///     last_name: "Reyes".to_string(),
///     email: "dana.reyes@example.com".to_string(),
///     phone: None,
///     skills: HashSet::new(),
///     certifications: HashSet::new(),
///     status: EntityStatus::Active,
///     contract_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     contract_end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// let building_id = Uuid::new_v4();
/// // 2026-03-09 is a Monday
/// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     guard_id: guard.id,
///     building_id,
///     start_datetime: day.and_hms_opt(8, 0, 0).unwrap(),
///     end_datetime: day.and_hms_opt(16, 0, 0).unwrap(),
///     shift_type: ShiftCategory::Normal,
///     is_confirmed: true,
/// };
/// let mut rates = HashMap::new();
/// rates.insert(building_id, RateSchedule::with_defaults(Decimal::from(10), None, None));
///
/// let summary = compute_payment(&guard, &[shift], &rates, &EngineConfig::default()).unwrap();
/// assert_eq!(summary.total_payment, Decimal::from(80));
/// ```
pub fn compute_payment(
    guard: &Guard,
    shifts: &[Shift],
    rate_table: &HashMap<Uuid, RateSchedule>,
    config: &EngineConfig,
) -> EngineResult<PayrollSummary> {
    let mut breakdown = HoursBreakdown::default();
    let mut total_payment = Decimal::ZERO;
    let mut defaulted_rate_shifts = Vec::new();

    for shift in shifts {
        let hours = classify_shift(shift, &config.classification)?;

        let rates = match rate_table.get(&shift.building_id) {
            Some(rates) => *rates,
            None => {
                defaulted_rate_shifts.push(shift.id);
                RateSchedule::zero()
            }
        };
        let night_rate = rates.hourly_rate * config.payroll.night_rate_multiplier;

        total_payment += hours.normal * rates.hourly_rate
            + hours.overtime * rates.overtime_rate
            + hours.holiday * rates.holiday_rate
            + hours.night * night_rate;
        breakdown.accumulate(&hours);
    }

    Ok(PayrollSummary {
        guard_id: guard.id,
        total_payment,
        total_hours: breakdown.total(),
        hours: breakdown,
        defaulted_rate_shifts,
    })
}
