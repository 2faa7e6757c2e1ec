//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file. Every knob has a documented
//! default, so the engine is fully usable without a file.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Knobs for the assignment scorer and rest validator.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Minimum hours of rest between two shifts of the same guard.
    pub minimum_rest_hours: i64,
    /// Length of the load-balancing recency window, in days.
    pub recent_shift_window_days: i64,
    /// Score awarded per skill matching a building requirement.
    pub skill_match_weight: i64,
    /// Flat bonus for a guard whose last shift cleared the rest window.
    pub rested_bonus: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            minimum_rest_hours: 12,
            recent_shift_window_days: 7,
            skill_match_weight: 10,
            rested_bonus: 5,
        }
    }
}

/// Knobs for the hour classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationConfig {
    /// Shifts starting at or after this hour are night shifts.
    pub night_shift_start_hour: u32,
    /// Shifts ending at or before this hour are night shifts.
    pub night_shift_end_hour: u32,
    /// Weekday whose shifts classify as holiday work.
    #[serde(deserialize_with = "weekday_from_name")]
    pub holiday_weekday: Weekday,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            night_shift_start_hour: 18,
            night_shift_end_hour: 6,
            holiday_weekday: Weekday::Sun,
        }
    }
}

/// Knobs for the payroll aggregator.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Multiplier applied to a building's hourly rate for night hours.
    pub night_rate_multiplier: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            night_rate_multiplier: Decimal::new(125, 2),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use roster_engine::config::EngineConfig;
/// use chrono::Weekday;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.scheduling.minimum_rest_hours, 12);
/// assert_eq!(config.classification.holiday_weekday, Weekday::Sun);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Scorer and rest validator knobs.
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    /// Hour classifier knobs.
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Payroll aggregator knobs.
    #[serde(default)]
    pub payroll: PayrollConfig,
}

impl EngineConfig {
    /// Checks value ranges after deserialization.
    ///
    /// Returns a description of the first violated constraint, if any.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.scheduling.minimum_rest_hours <= 0 {
            return Err("scheduling.minimum_rest_hours must be positive".to_string());
        }
        if self.scheduling.recent_shift_window_days < 0 {
            return Err("scheduling.recent_shift_window_days must not be negative".to_string());
        }
        if self.classification.night_shift_start_hour >= 24 {
            return Err("classification.night_shift_start_hour must be below 24".to_string());
        }
        if self.classification.night_shift_end_hour >= 24 {
            return Err("classification.night_shift_end_hour must be below 24".to_string());
        }
        if self.payroll.night_rate_multiplier <= Decimal::ZERO {
            return Err("payroll.night_rate_multiplier must be positive".to_string());
        }
        Ok(())
    }
}

/// Parses a weekday from its lowercase English name (e.g., "sunday").
fn weekday_from_name<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<Weekday>()
        .map_err(|_| serde::de::Error::custom(format!("unrecognized weekday name '{}'", name)))
}
