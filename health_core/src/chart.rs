//! Multi-panel text chart for the weekly report.
//!
//! Each series gets its own panel: one horizontal bar per row, scaled to
//! the panel's largest value.

use crate::report::{MetricSeries, WeeklyReport};
use std::fmt::Write;

/// Title shown above the panels
pub const CHART_TITLE: &str = "Weekly Health Stats";

/// Default bar width in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR: char = '█';

/// Number of bar cells for `value` against the panel maximum.
///
/// Negative, non-finite or zero-max inputs draw nothing, as does a zero width.
pub fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if width == 0 || !value.is_finite() || !max.is_finite() || value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    // Tiny positive values still show a sliver
    cells.clamp(1, width)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn render_panel(out: &mut String, series: &MetricSeries, width: usize) {
    let max = series
        .points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let _ = writeln!(out, "{}", series.metric.label());
    for point in &series.points {
        let cells = bar_len(point.value, max, width);
        let _ = writeln!(
            out,
            "  {} │{}{} {}",
            point.date.format("%Y-%m-%d"),
            BAR.to_string().repeat(cells),
            " ".repeat(width - cells),
            format_value(point.value)
        );
    }
}

/// Render every panel of the report
pub fn render_chart(report: &WeeklyReport, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();
    let _ = writeln!(out, "{}", CHART_TITLE);
    for (i, series) in report.series.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_panel(&mut out, series, width);
    }
    out
}
