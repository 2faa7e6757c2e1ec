//! Payroll output models.
//!
//! This module contains the [`HoursBreakdown`] produced by the hour
//! classifier and the [`PayrollSummary`] returned by the payroll
//! aggregator. Both are ephemeral results: the engine never persists them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hours of a shift set decomposed into the four pay buckets.
///
/// For a single classified shift exactly one bucket is non-zero; aggregated
/// breakdowns accumulate across shifts. The bucket values always sum to the
/// total worked duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Hours paid at the normal rate.
    pub normal: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime: Decimal,
    /// Hours paid at the holiday rate.
    pub holiday: Decimal,
    /// Hours paid at the night rate.
    pub night: Decimal,
}

impl HoursBreakdown {
    /// Sums all four buckets.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::HoursBreakdown;
    /// use rust_decimal::Decimal;
    ///
    /// let hours = HoursBreakdown {
    ///     normal: Decimal::from(8),
    ///     overtime: Decimal::from(4),
    ///     ..Default::default()
    /// };
    /// assert_eq!(hours.total(), Decimal::from(12));
    /// ```
    pub fn total(&self) -> Decimal {
        self.normal + self.overtime + self.holiday + self.night
    }

    /// Adds another breakdown into this one, bucket by bucket.
    pub fn accumulate(&mut self, other: &HoursBreakdown) {
        self.normal += other.normal;
        self.overtime += other.overtime;
        self.holiday += other.holiday;
        self.night += other.night;
    }
}

/// The result of aggregating payroll over a guard's shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The guard the payment is for.
    pub guard_id: Uuid,
    /// Total payment across all shifts, unrounded.
    pub total_payment: Decimal,
    /// Worked hours decomposed by pay bucket.
    pub hours: HoursBreakdown,
    /// Sum of all bucket hours (equals the summed shift durations).
    pub total_hours: Decimal,
    /// Shifts whose building was missing from the rate table and was paid
    /// at all-zero rates. Callers use this to flag inconsistent data.
    pub defaulted_rate_shifts: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_sums_all_buckets() {
        let hours = HoursBreakdown {
            normal: dec("8"),
            overtime: dec("2.5"),
            holiday: dec("4"),
            night: dec("1.5"),
        };
        assert_eq!(hours.total(), dec("16"));
    }

    #[test]
    fn test_default_breakdown_is_empty() {
        let hours = HoursBreakdown::default();
        assert_eq!(hours.total(), Decimal::ZERO);
    }

    #[test]
    fn test_accumulate_adds_bucket_by_bucket() {
        let mut hours = HoursBreakdown {
            normal: dec("8"),
            ..Default::default()
        };
        hours.accumulate(&HoursBreakdown {
            normal: dec("2"),
            night: dec("6"),
            ..Default::default()
        });
        assert_eq!(hours.normal, dec("10"));
        assert_eq!(hours.night, dec("6"));
        assert_eq!(hours.total(), dec("16"));
    }

    #[test]
    fn test_serialize_breakdown_decimals_as_strings() {
        let hours = HoursBreakdown {
            normal: dec("7.5"),
            ..Default::default()
        };
        let json = serde_json::to_string(&hours).unwrap();
        assert!(json.contains("\"normal\":\"7.5\""));
        assert!(json.contains("\"night\":\"0\""));
    }

    #[test]
    fn test_serialize_payroll_summary() {
        let summary = PayrollSummary {
            guard_id: Uuid::from_u128(1),
            total_payment: dec("140.00"),
            hours: HoursBreakdown {
                normal: dec("8"),
                overtime: dec("4"),
                ..Default::default()
            },
            total_hours: dec("12"),
            defaulted_rate_shifts: vec![Uuid::from_u128(100)],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_payment\":\"140.00\""));
        assert!(json.contains("\"total_hours\":\"12\""));
        assert!(json.contains("\"defaulted_rate_shifts\":[\"00000000-0000-0000-0000-000000000064\"]"));
    }

    #[test]
    fn test_deserialize_payroll_summary() {
        let json = r#"{
            "guard_id": "00000000-0000-0000-0000-000000000001",
            "total_payment": "140",
            "hours": {"normal": "8", "overtime": "4", "holiday": "0", "night": "0"},
            "total_hours": "12",
            "defaulted_rate_shifts": []
        }"#;

        let summary: PayrollSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_payment, dec("140"));
        assert_eq!(summary.hours.overtime, dec("4"));
        assert!(summary.defaulted_rate_shifts.is_empty());
    }
}
