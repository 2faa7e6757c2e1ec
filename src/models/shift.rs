//! Shift model.
//!
//! This module contains the [`Shift`] type binding one guard to one
//! building over a bounded time interval, and the [`ShiftCategory`]
//! declared at creation time.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category a shift is declared with at creation.
///
/// The declared category and the payroll hour bucket are independent: the
/// hour classifier may place a shift's duration in a different bucket than
/// the one it was declared with (an `overtime` declaration is the only one
/// the classifier honors directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// A regular daytime shift.
    Normal,
    /// A shift declared as overtime work.
    Overtime,
    /// A shift declared as holiday cover.
    Holiday,
    /// A shift declared as night work.
    Night,
}

impl Default for ShiftCategory {
    fn default() -> Self {
        Self::Normal
    }
}

/// A work shift assigning one guard to one building.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Shift, ShiftCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     guard_id: Uuid::new_v4(),
///     building_id: Uuid::new_v4(),
///     start_datetime: day.and_hms_opt(8, 0, 0).unwrap(),
///     end_datetime: day.and_hms_opt(16, 30, 0).unwrap(),
///     shift_type: ShiftCategory::Normal,
///     is_confirmed: false,
/// };
/// assert_eq!(shift.duration_hours(), Decimal::new(85, 1)); // 8.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The guard assigned to the shift.
    pub guard_id: Uuid,
    /// The building the shift covers.
    pub building_id: Uuid,
    /// When the shift starts.
    pub start_datetime: NaiveDateTime,
    /// When the shift ends.
    pub end_datetime: NaiveDateTime,
    /// The category declared at creation.
    #[serde(default)]
    pub shift_type: ShiftCategory,
    /// Whether the assigned guard has confirmed the shift.
    #[serde(default)]
    pub is_confirmed: bool,
}

impl Shift {
    /// Computes the shift duration in hours at minute granularity.
    ///
    /// The value is signed: a shift whose end precedes its start yields a
    /// negative duration. The hour classifier rejects such spans before any
    /// payroll use.
    ///
    /// # Returns
    ///
    /// The duration as a `Decimal` (whole minutes divided by 60).
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end_datetime - self.start_datetime).num_minutes();
        Decimal::from(minutes) / Decimal::new(60, 0)
    }

    /// Returns the calendar date the shift starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_datetime.date()
    }
}
