//! Metrics logger: validates one day's raw input and appends a record.

use crate::{round2, DailyRecord, InputError, Measurements, MetricsStore};
use chrono::NaiveDate;
use std::str::FromStr;

/// Raw text for one day's measurements, as typed by the user
#[derive(Clone, Debug, Default)]
pub struct RawMeasurements {
    pub steps: String,
    pub sleep_hours: String,
    pub calories: String,
    pub water_liters: String,
    pub weight: String,
    pub height: String,
}

/// Body-mass index in kg/m², rounded to 2 decimals.
///
/// A height of zero yields 0 rather than an error.
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    if height == 0.0 {
        return 0.0;
    }
    round2(weight / (height * height))
}

/// Parse a single trimmed field, naming it in the error
pub fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, InputError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| InputError::InvalidInput {
            field,
            value: value.to_string(),
        })
}

/// Parse every field; the first failure rejects the whole entry
pub fn parse_measurements(raw: &RawMeasurements) -> Result<Measurements, InputError> {
    Ok(Measurements {
        steps: parse_field("steps", &raw.steps)?,
        sleep_hours: parse_field("sleep_hours", &raw.sleep_hours)?,
        calories: parse_field("calories", &raw.calories)?,
        water_liters: parse_field("water_liters", &raw.water_liters)?,
        weight: parse_field("weight", &raw.weight)?,
        height: parse_field("height", &raw.height)?,
    })
}

/// Validate `raw`, then append a record dated `today` to the store.
///
/// On any parse failure the store is left untouched. Persisting the
/// appended record is the caller's job.
pub fn log_daily_metrics(
    store: &mut MetricsStore,
    raw: &RawMeasurements,
    today: NaiveDate,
) -> Result<DailyRecord, InputError> {
    let measurements = parse_measurements(raw)?;
    Ok(append_measurements(store, &measurements, today))
}

/// Append a record dated `today` built from already-validated measurements
pub fn append_measurements(
    store: &mut MetricsStore,
    measurements: &Measurements,
    today: NaiveDate,
) -> DailyRecord {
    let record = DailyRecord::new(today, measurements);
    store.append(record.clone());
    tracing::debug!(
        "Logged record for {} (BMI {}), table now has {} rows",
        record.date,
        record.bmi,
        store.len()
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(steps: &str, height: &str) -> RawMeasurements {
        RawMeasurements {
            steps: steps.into(),
            sleep_hours: "7.5".into(),
            calories: "2100".into(),
            water_liters: "2.2".into(),
            weight: "70".into(),
            height: height.into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn test_calculate_bmi() {
        assert_eq!(calculate_bmi(70.0, 1.75), 22.86);
        assert_eq!(calculate_bmi(90.0, 1.8), 27.78);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_parse_measurements_trims_whitespace() {
        let m = parse_measurements(&raw(" 8000 \n", "1.75")).unwrap();
        assert_eq!(m.steps, 8000);
        assert_eq!(m.height, 1.75);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let m = parse_measurements(&raw("-50", "1.75")).unwrap();
        assert_eq!(m.steps, -50);
    }

    #[test]
    fn test_fractional_steps_rejected() {
        let err = parse_measurements(&raw("8000.5", "1.75")).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidInput {
                field: "steps",
                value: "8000.5".into()
            }
        );
        assert_eq!(err.to_string(), "Invalid input.");
    }

    #[test]
    fn test_log_appends_record_dated_today() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = MetricsStore::open(temp_dir.path().join("health_data.csv")).unwrap();

        let record = log_daily_metrics(&mut store, &raw("8000", "1.75"), today()).unwrap();
        assert_eq!(record.date, today());
        assert_eq!(record.bmi, 22.86);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0], record);
    }

    #[test]
    fn test_any_bad_field_leaves_table_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = MetricsStore::open(temp_dir.path().join("health_data.csv")).unwrap();
        log_daily_metrics(&mut store, &raw("8000", "1.75"), today()).unwrap();

        let bad_entries = [
            raw("lots", "1.75"),
            raw("8000", "tall"),
            RawMeasurements {
                water_liters: String::new(),
                ..raw("8000", "1.75")
            },
        ];
        for entry in &bad_entries {
            assert!(log_daily_metrics(&mut store, entry, today()).is_err());
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn test_parse_field_names_failing_field() {
        assert_eq!(parse_field::<f64>("water_liters", " 1.25 "), Ok(1.25));
        let err = parse_field::<i64>("calories", "lots").unwrap_err();
        assert!(matches!(err, InputError::InvalidInput { field: "calories", .. }));
    }

    #[test]
    fn test_zero_height_logs_zero_bmi() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = MetricsStore::open(temp_dir.path().join("health_data.csv")).unwrap();
        let record = log_daily_metrics(&mut store, &raw("100", "0"), today()).unwrap();
        assert_eq!(record.bmi, 0.0);
    }
}
