//! Shift hour classification.
//!
//! This module decomposes a shift's duration into the four pay buckets.
//! A shift lands in exactly one bucket: there is no pro-rating across
//! midnight or across bucket boundaries, so a shift crossing into a
//! holiday or a night window is classified whole by its start and end
//! attributes.

use chrono::{Datelike, Timelike};

use crate::config::ClassificationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{HoursBreakdown, Shift, ShiftCategory};

/// Classifies a shift's duration into one pay bucket.
///
/// Rules are evaluated in precedence order and the first match takes the
/// whole duration:
///
/// 1. The start date falls on the configured holiday weekday: `holiday`.
/// 2. The shift was declared `overtime`: `overtime`.
/// 3. The shift starts at or after `night_shift_start_hour`, or ends at or
///    before `night_shift_end_hour` (hour component only): `night`.
/// 4. Otherwise: `normal`.
///
/// Declared `holiday` and `night` categories do not force their bucket;
/// only the weekday and hour rules above do.
///
/// # Arguments
///
/// * `shift` - The shift to classify
/// * `config` - Holiday weekday and night window knobs
///
/// # Returns
///
/// A breakdown with exactly one non-zero bucket, or `InvalidShift` when
/// the shift ends at or before its start.
///
/// # Example
///
/// ```
/// use roster_engine::config::ClassificationConfig;
/// use roster_engine::models::{Shift, ShiftCategory};
/// use roster_engine::payroll::classify_shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// // Saturday 22:00 to Sunday 06:00: a night shift, not holiday work,
/// // because classification follows the start date.
/// let saturday = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     guard_id: Uuid::new_v4(),
///     building_id: Uuid::new_v4(),
///     start_datetime: saturday.and_hms_opt(22, 0, 0).unwrap(),
///     end_datetime: saturday.succ_opt().unwrap().and_hms_opt(6, 0, 0).unwrap(),
///     shift_type: ShiftCategory::Normal,
///     is_confirmed: true,
/// };
///
/// let hours = classify_shift(&shift, &ClassificationConfig::default()).unwrap();
/// assert_eq!(hours.night, Decimal::from(8));
/// assert_eq!(hours.holiday, Decimal::ZERO);
/// ```
pub fn classify_shift(
    shift: &Shift,
    config: &ClassificationConfig,
) -> EngineResult<HoursBreakdown> {
    if shift.end_datetime <= shift.start_datetime {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id,
            message: "end_datetime must be after start_datetime".to_string(),
        });
    }

    let duration = shift.duration_hours();
    let mut hours = HoursBreakdown::default();

    if shift.start_date().weekday() == config.holiday_weekday {
        hours.holiday = duration;
    } else if shift.shift_type == ShiftCategory::Overtime {
        hours.overtime = duration;
    } else if is_night_span(shift, config) {
        hours.night = duration;
    } else {
        hours.normal = duration;
    }

    Ok(hours)
}

/// Whether the shift's span falls in the configured night window.
fn is_night_span(shift: &Shift, config: &ClassificationConfig) -> bool {
    shift.start_datetime.hour() >= config.night_shift_start_hour
        || shift.end_datetime.hour() <= config.night_shift_end_hour
}
