//! Console rendering shared by the menu and the one-shot subcommands.

use health_core::chart::{render_chart, DEFAULT_BAR_WIDTH};
use health_core::{CalorieInput, DailyRecord, WeeklyReport};
use std::io::{self, Write};

pub const NO_DATA_MESSAGE: &str = "No data for the past week.";

pub fn logged<W: Write>(out: &mut W, record: &DailyRecord) -> io::Result<()> {
    writeln!(out, "Data logged. Your BMI is {}", record.bmi)
}

/// Averages table followed by the chart panels
pub fn weekly_report<W: Write>(
    out: &mut W,
    report: Option<&WeeklyReport>,
    window_days: u32,
) -> io::Result<()> {
    let report = match report {
        Some(report) => report,
        None => return writeln!(out, "{}", NO_DATA_MESSAGE),
    };

    writeln!(out, "\nAverages (last {} days):", window_days)?;
    for (name, value) in report.averages.rows() {
        writeln!(out, "{:<12} {:>10.2}", name, value)?;
    }
    writeln!(out)?;
    write!(out, "{}", render_chart(report, DEFAULT_BAR_WIDTH))
}

pub fn calories<W: Write>(out: &mut W, input: &CalorieInput) -> io::Result<()> {
    let calories = health_core::estimate_daily_calories(input);
    writeln!(
        out,
        "Estimated daily calories to maintain weight: {} kcal",
        calories
    )
}
