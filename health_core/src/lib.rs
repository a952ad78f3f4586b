#![forbid(unsafe_code)]

//! Core domain model and business logic for the health tracker.
//!
//! This crate provides:
//! - Daily record types and BMI derivation
//! - The CSV-backed metrics store
//! - Weekly reporting and terminal charts
//! - Calorie estimation and the hydration check

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod store;
pub mod metrics;
pub mod report;
pub mod chart;
pub mod calories;
pub mod hydration;

// Re-export commonly used types
pub use error::{Error, InputError, Result};
pub use types::*;
pub use config::Config;
pub use store::MetricsStore;
pub use metrics::{
    append_measurements, calculate_bmi, log_daily_metrics, parse_field, parse_measurements,
    RawMeasurements,
};
pub use report::{weekly_report, WeeklyReport};
pub use calories::{
    estimate_daily_calories, parse_calorie_input, ActivityLevel, CalorieInput, Gender,
    RawCalorieInput,
};
pub use hydration::{hydration_check, HydrationReminder};
