//! Display formatting for hours, percentages and German dates.
//!
//! Every summary the application prints goes through these helpers so the
//! console tables and the exported files agree on the same text:
//!
//! - hours as one decimal with an `h` suffix: `8.0h`, `-0.5h`
//! - signed deltas with an explicit sign: `+1.5h`, `-2.0h`
//! - dates in German notation: `19.10.2026`, weekdays as `Mo 19.10.`
//! - clock times as `HH:MM`
//!
//! ```rust
//! use zeitkonto::libs::formatter::{format_hours, format_signed_hours};
//!
//! assert_eq!(format_hours(8.0), "8.0h");
//! assert_eq!(format_signed_hours(-1.5), "-1.5h");
//! ```

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

/// Sign classification for deltas and balances, used to colour output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Values at or above zero count as positive.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    /// prettytable style spec: green for positive, red for negative.
    pub fn style_spec(&self) -> &'static str {
        match self {
            Tone::Positive => "Fg",
            Tone::Negative => "Fr",
        }
    }
}

/// Rounds an hour value to one decimal place.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Converts minutes to hours without rounding.
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Formats with an explicit `+` for non-negative values.
pub fn format_signed_hours(hours: f64) -> String {
    match Tone::of(hours) {
        Tone::Positive => format!("+{:.1}h", hours.abs()),
        Tone::Negative => format!("-{:.1}h", hours.abs()),
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Formats a chrono::Duration as "HH:MM", with a leading `-` when negative.
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_clock(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

/// `19.10.2026 09:00`
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Two-letter German weekday abbreviation.
pub fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

/// `Mo 19.10.`
pub fn format_weekday(date: &NaiveDate) -> String {
    format!("{} {}", weekday_short(date.weekday()), date.format("%d.%m."))
}

/// Renders an optional clock time, using `-` when absent.
pub fn format_optional_clock(value: Option<&NaiveDateTime>) -> String {
    value.map(format_clock).unwrap_or_else(|| "-".to_string())
}
