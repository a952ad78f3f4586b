//! Core domain types for the health tracker.
//!
//! This module defines:
//! - Validated daily measurements
//! - The persisted daily record with its derived BMI
//! - Rounding helpers shared by the logger and the reporter

use chrono::NaiveDate;

// ============================================================================
// Measurement Types
// ============================================================================

/// One day's measurements after type validation.
///
/// Values are not range-checked: negative steps are accepted as entered.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurements {
    pub steps: i64,
    pub sleep_hours: f64,
    pub calories: i64,
    pub water_liters: f64,
    /// Kilograms
    pub weight: f64,
    /// Meters
    pub height: f64,
}

// ============================================================================
// Record Types
// ============================================================================

/// A single row of the metrics table
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub steps: i64,
    pub sleep_hours: f64,
    pub calories: i64,
    pub water_liters: f64,
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
}

impl DailyRecord {
    /// Build a record for `date`, deriving BMI from weight and height
    pub fn new(date: NaiveDate, measurements: &Measurements) -> Self {
        Self {
            date,
            steps: measurements.steps,
            sleep_hours: measurements.sleep_hours,
            calories: measurements.calories,
            water_liters: measurements.water_liters,
            weight: measurements.weight,
            height: measurements.height,
            bmi: crate::metrics::calculate_bmi(measurements.weight, measurements.height),
        }
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to two decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Round to the nearest integer, ties to even
pub fn round_whole(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(22.857142), 22.86);
        assert_eq!(round2(4000.0), 4000.0);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_round_whole_ties_to_even() {
        assert_eq!(round_whole(2594.3125), 2594);
        assert_eq!(round_whole(2500.5), 2500);
        assert_eq!(round_whole(2501.5), 2502);
    }

    #[test]
    fn test_record_derives_bmi() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let m = Measurements {
            steps: 8000,
            sleep_hours: 7.5,
            calories: 2200,
            water_liters: 1.8,
            weight: 70.0,
            height: 1.75,
        };
        let record = DailyRecord::new(date, &m);
        assert_eq!(record.bmi, 22.86);
        assert_eq!(record.date, date);
        assert_eq!(record.steps, 8000);
    }
}
