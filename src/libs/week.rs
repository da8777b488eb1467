//! Week overview: weekday buckets, daily aggregation and the weekly rollup.
//!
//! The week always starts on Monday and only the five working days are
//! reported. Each day collects the entries whose *start* falls on that
//! calendar day; open entries count toward the earliest start but add no
//! minutes and no end time.
//!
//! Day hours are rounded to one decimal once, here. The weekly total is the
//! sum of those five values and completion compares the same value, so the
//! rows of a rendered table or export always add up to the total shown
//! beneath them and a day shown as `8.0h` is complete.

use super::entry::TimeEntry;
use super::formatter::{minutes_to_hours, round_hours, Tone};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const DEFAULT_TARGET_HOURS_PER_DAY: f64 = 8.0;
pub const WORKDAYS_PER_WEEK: usize = 5;

/// The Monday-to-Friday span of a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub monday: NaiveDate,
}

impl WeekRange {
    /// The week containing `today`, starting on its Monday.
    pub fn containing(today: NaiveDate) -> Self {
        let offset = today.weekday().num_days_from_monday() as i64;
        Self {
            monday: today - Duration::days(offset),
        }
    }

    pub fn friday(&self) -> NaiveDate {
        self.monday + Duration::days(WORKDAYS_PER_WEEK as i64 - 1)
    }

    /// Monday through Friday.
    pub fn weekdays(&self) -> [NaiveDate; WORKDAYS_PER_WEEK] {
        let mut days = [self.monday; WORKDAYS_PER_WEEK];
        for (offset, day) in days.iter_mut().enumerate() {
            *day = self.monday + Duration::days(offset as i64);
        }
        days
    }

    /// Inclusive lower bound for fetching: Monday 00:00.
    pub fn start_bound(&self) -> NaiveDateTime {
        self.monday.and_time(chrono::NaiveTime::MIN)
    }

    /// Exclusive upper bound for fetching: Saturday 00:00.
    pub fn end_bound(&self) -> NaiveDateTime {
        (self.friday() + Duration::days(1)).and_time(chrono::NaiveTime::MIN)
    }
}

/// Aggregated values for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub minutes: i64,
    /// Rounded to one decimal.
    pub hours: f64,
    pub first_start: Option<NaiveDateTime>,
    pub last_end: Option<NaiveDateTime>,
    pub complete: bool,
}

/// Five day rows plus the weekly rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekOverview {
    pub range: WeekRange,
    pub days: Vec<DayOverview>,
    pub total_hours: f64,
    pub target_hours_per_day: f64,
    pub target_hours: f64,
    pub delta_hours: f64,
}

impl WeekOverview {
    pub fn tone(&self) -> Tone {
        Tone::of(self.delta_hours)
    }

    pub fn total_minutes(&self) -> i64 {
        self.days.iter().map(|day| day.minutes).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|day| day.first_start.is_none())
    }
}

/// Aggregates the entries starting on `date`.
pub fn day_overview(entries: &[TimeEntry], date: NaiveDate, target_hours: f64) -> DayOverview {
    let day_entries: Vec<&TimeEntry> = entries.iter().filter(|entry| entry.start.date() == date).collect();

    let minutes: i64 = day_entries.iter().filter_map(|entry| entry.net_minutes()).sum();
    let first_start = day_entries.iter().map(|entry| entry.start).min();
    let last_end = day_entries.iter().filter_map(|entry| entry.end).max();
    let hours = round_hours(minutes_to_hours(minutes));

    DayOverview {
        date,
        minutes,
        hours,
        first_start,
        last_end,
        complete: hours >= target_hours,
    }
}

/// Builds the overview for the week containing `today`.
pub fn week_overview(entries: &[TimeEntry], today: NaiveDate, target_hours_per_day: f64) -> WeekOverview {
    let range = WeekRange::containing(today);
    let days: Vec<DayOverview> = range
        .weekdays()
        .iter()
        .map(|date| day_overview(entries, *date, target_hours_per_day))
        .collect();

    // Rounding the sum of one-decimal values only strips float noise.
    let total_hours = round_hours(days.iter().map(|day| day.hours).sum());
    let target_hours = target_hours_per_day * WORKDAYS_PER_WEEK as f64;

    WeekOverview {
        range,
        days,
        total_hours,
        target_hours_per_day,
        target_hours,
        delta_hours: round_hours(total_hours - target_hours),
    }
}
