//! Weekly report over a trailing window of calendar days.
//!
//! The window ends on `today` inclusive and reaches back `window_days - 1`
//! days. Rows dated after `today` are also selected.

use crate::{round2, DailyRecord, Result};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Length of the default trailing window
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Columns that get a chart panel
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Metric {
    Steps,
    SleepHours,
    Calories,
    WaterLiters,
}

impl Metric {
    pub const CHARTED: [Metric; 4] = [
        Metric::Steps,
        Metric::SleepHours,
        Metric::Calories,
        Metric::WaterLiters,
    ];

    /// Column name, as in the backing file
    pub fn label(self) -> &'static str {
        match self {
            Metric::Steps => "Steps",
            Metric::SleepHours => "SleepHours",
            Metric::Calories => "Calories",
            Metric::WaterLiters => "WaterLiters",
        }
    }

    fn value(self, record: &DailyRecord) -> f64 {
        match self {
            Metric::Steps => record.steps as f64,
            Metric::SleepHours => record.sleep_hours,
            Metric::Calories => record.calories as f64,
            Metric::WaterLiters => record.water_liters,
        }
    }
}

/// Column-wise means over the window, each rounded to 2 decimals
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Averages {
    pub steps: f64,
    pub sleep_hours: f64,
    pub calories: f64,
    pub water_liters: f64,
    pub bmi: f64,
}

impl Averages {
    /// (column name, value) pairs in display order
    pub fn rows(&self) -> [(&'static str, f64); 5] {
        [
            ("Steps", self.steps),
            ("SleepHours", self.sleep_hours),
            ("Calories", self.calories),
            ("WaterLiters", self.water_liters),
            ("BMI", self.bmi),
        ]
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One chart panel: a metric indexed by date
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MetricSeries {
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WeeklyReport {
    /// First calendar day inside the window
    pub since: NaiveDate,
    pub entries: usize,
    pub averages: Averages,
    pub series: Vec<MetricSeries>,
}

impl WeeklyReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// First day of a `window_days`-long window ending on `today`
pub fn window_start(today: NaiveDate, window_days: u32) -> NaiveDate {
    let back = u64::from(window_days.max(1) - 1);
    today.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

fn mean(records: &[&DailyRecord], f: impl Fn(&DailyRecord) -> f64) -> f64 {
    let total: f64 = records.iter().map(|r| f(*r)).sum();
    round2(total / records.len() as f64)
}

/// Build the report, or `None` when no row falls inside the window
pub fn weekly_report(
    records: &[DailyRecord],
    today: NaiveDate,
    window_days: u32,
) -> Option<WeeklyReport> {
    let since = window_start(today, window_days);
    let mut selected: Vec<&DailyRecord> = records.iter().filter(|r| r.date >= since).collect();

    tracing::debug!(
        "Selected {} of {} records since {}",
        selected.len(),
        records.len(),
        since
    );

    if selected.is_empty() {
        return None;
    }

    let averages = Averages {
        steps: mean(&selected, |r| r.steps as f64),
        sleep_hours: mean(&selected, |r| r.sleep_hours),
        calories: mean(&selected, |r| r.calories as f64),
        water_liters: mean(&selected, |r| r.water_liters),
        bmi: mean(&selected, |r| r.bmi),
    };

    // Stable: same-day rows keep their file order
    selected.sort_by_key(|r| r.date);
    let series = Metric::CHARTED
        .iter()
        .map(|&metric| MetricSeries {
            metric,
            points: selected
                .iter()
                .map(|r| SeriesPoint {
                    date: r.date,
                    value: metric.value(r),
                })
                .collect(),
        })
        .collect();

    Some(WeeklyReport {
        since,
        entries: selected.len(),
        averages,
        series,
    })
}
