//! Hydration check against today's first record.

use crate::DailyRecord;
use chrono::NaiveDate;
use std::fmt;

/// Daily water intake below which a reminder is shown
pub const DEFAULT_MIN_WATER_LITERS: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct HydrationReminder {
    pub water_liters: f64,
    pub min_liters: f64,
}

impl fmt::Display for HydrationReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reminder: You're below {}L water intake today. Stay hydrated!",
            self.min_liters
        )
    }
}

/// Reminder if today's first record shows intake under `min_liters`.
///
/// No record for today means no reminder.
pub fn hydration_check(
    records: &[DailyRecord],
    today: NaiveDate,
    min_liters: f64,
) -> Option<HydrationReminder> {
    let record = records.iter().find(|r| r.date == today)?;
    if record.water_liters < min_liters {
        Some(HydrationReminder {
            water_liters: record.water_liters,
            min_liters,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Measurements;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
    }

    fn create_test_record(date: NaiveDate, water_liters: f64) -> DailyRecord {
        DailyRecord::new(
            date,
            &Measurements {
                steps: 3000,
                sleep_hours: 6.0,
                calories: 1800,
                water_liters,
                weight: 65.0,
                height: 1.7,
            },
        )
    }

    #[test]
    fn test_low_intake_reminds() {
        let records = vec![create_test_record(today(), 1.5)];
        let reminder = hydration_check(&records, today(), DEFAULT_MIN_WATER_LITERS).unwrap();
        assert_eq!(reminder.water_liters, 1.5);
        assert_eq!(
            reminder.to_string(),
            "Reminder: You're below 2L water intake today. Stay hydrated!"
        );
    }

    #[test]
    fn test_enough_intake_is_quiet() {
        let records = vec![create_test_record(today(), 2.5)];
        assert!(hydration_check(&records, today(), DEFAULT_MIN_WATER_LITERS).is_none());

        let exactly = vec![create_test_record(today(), 2.0)];
        assert!(hydration_check(&exactly, today(), DEFAULT_MIN_WATER_LITERS).is_none());
    }

    #[test]
    fn test_no_entry_today_is_quiet() {
        let yesterday = today().pred_opt().unwrap();
        let records = vec![create_test_record(yesterday, 0.5)];
        assert!(hydration_check(&records, today(), DEFAULT_MIN_WATER_LITERS).is_none());
        assert!(hydration_check(&[], today(), DEFAULT_MIN_WATER_LITERS).is_none());
    }

    #[test]
    fn test_first_entry_for_today_wins() {
        let records = vec![
            create_test_record(today().pred_opt().unwrap(), 0.1),
            create_test_record(today(), 3.0),
            create_test_record(today(), 0.5),
        ];
        assert!(hydration_check(&records, today(), DEFAULT_MIN_WATER_LITERS).is_none());
    }

    #[test]
    fn test_custom_threshold() {
        let records = vec![create_test_record(today(), 2.5)];
        let reminder = hydration_check(&records, today(), 3.0).unwrap();
        assert!(reminder.to_string().contains("below 3L"));
    }
}
