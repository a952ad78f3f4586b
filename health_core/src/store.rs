//! CSV-backed metrics table.
//!
//! The table is loaded wholesale at startup and rewritten wholesale on every
//! save. Columns are fixed:
//! `Date,Steps,SleepHours,Calories,WaterLiters,Weight,Height,BMI`.

use crate::{DailyRecord, Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Header row of the backing file, in order
pub const COLUMNS: [&str; 8] = [
    "Date",
    "Steps",
    "SleepHours",
    "Calories",
    "WaterLiters",
    "Weight",
    "Height",
    "BMI",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row in the CSV file
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    date: String,
    steps: i64,
    sleep_hours: f64,
    calories: i64,
    water_liters: f64,
    weight: f64,
    height: f64,
    #[serde(rename = "BMI")]
    bmi: f64,
}

impl From<&DailyRecord> for CsvRow {
    fn from(record: &DailyRecord) -> Self {
        CsvRow {
            date: record.date.format(DATE_FORMAT).to_string(),
            steps: record.steps,
            sleep_hours: record.sleep_hours,
            calories: record.calories,
            water_liters: record.water_liters,
            weight: record.weight,
            height: record.height,
            bmi: record.bmi,
        }
    }
}

impl CsvRow {
    fn into_record(self, line: u64) -> Result<DailyRecord> {
        let date = parse_date(&self.date).ok_or_else(|| Error::MalformedRecord {
            line,
            message: format!("invalid date {:?}", self.date),
        })?;

        Ok(DailyRecord {
            date,
            steps: self.steps,
            sleep_hours: self.sleep_hours,
            calories: self.calories,
            water_liters: self.water_liters,
            weight: self.weight,
            height: self.height,
            bmi: self.bmi,
        })
    }
}

/// Parse a Date cell, discarding any time-of-day component
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Create the backing file with only the header row if it does not exist.
///
/// An existing file is left alone, whatever it contains. Returns whether
/// the file was created.
pub fn ensure_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    save_records(path, &[])?;
    tracing::info!("Created empty metrics table at {:?}", path);
    Ok(true)
}

/// Read the whole table. Any unreadable row fails the load.
pub fn load_records(path: &Path) -> Result<Vec<DailyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        // Line 1 is the header
        records.push(row.into_record(index as u64 + 2)?);
    }

    tracing::debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Overwrite the backing file with `records`.
///
/// Writes to a temp file in the same directory, then renames it over the
/// target.
pub fn save_records(path: &Path, records: &[DailyRecord]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let temp = NamedTempFile::new_in(&parent)?;
    write_csv(temp.as_file(), records)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {} records to {:?}", records.len(), path);
    Ok(())
}

/// The session's in-memory table and the file it came from.
///
/// `open`, `append` and `save` are the only ways the table changes.
#[derive(Debug)]
pub struct MetricsStore {
    path: PathBuf,
    records: Vec<DailyRecord>,
}

impl MetricsStore {
    /// Ensure the backing file exists, then load it
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_exists(&path)?;
        let records = load_records(&path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record in memory. Duplicate dates are allowed.
    pub fn append(&mut self, record: DailyRecord) {
        self.records.push(record);
    }

    /// Persist the full table, replacing the file's previous contents
    pub fn save(&self) -> Result<()> {
        save_records(&self.path, &self.records)
    }
}

/// Write `records` as CSV, header included.
///
/// The header is written by hand so an empty table still carries it.
fn write_csv<W: Write>(out: W, records: &[DailyRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
