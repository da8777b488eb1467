//! Time entry records and the net-duration calculation.
//!
//! A single `time_entries` row carries everything the summaries need: the
//! project grouping key, the check-in location and the break minutes. The
//! project and check-in views read the same row, hence the aliases below.
//!
//! ## Net duration
//!
//! ```text
//! net_minutes = (end - start in whole minutes) - break_minutes (default 0)
//! hours       = net_minutes / 60, rounded to one decimal for display
//! ```
//!
//! An entry without `end` is still running and has no duration at all. It is
//! never treated as zero. `end >= start` is assumed and a break longer than
//! the gross time is subtracted as is, so both can yield negative hours.

use super::formatter::{format_hours, minutes_to_hours, round_hours};
use super::timestamp;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tracked work interval as stored in `time_entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(rename = "started_at", with = "timestamp::required")]
    pub start: NaiveDateTime,
    #[serde(rename = "ended_at", default, with = "timestamp::optional")]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub break_minutes: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Entry read for project-time distribution.
pub type ProjectTimeEntry = TimeEntry;

/// Entry read for the check-in history.
pub type CheckInRecord = TimeEntry;

/// Worked hours of a single entry, or the marker for a running entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkedHours {
    /// Net hours rounded to one decimal.
    Computed(f64),
    /// The entry has no end yet.
    NotComputed,
}

impl WorkedHours {
    pub fn hours(&self) -> Option<f64> {
        match self {
            WorkedHours::Computed(hours) => Some(*hours),
            WorkedHours::NotComputed => None,
        }
    }
}

impl fmt::Display for WorkedHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WorkedHours::Computed(hours) => write!(f, "{}", format_hours(*hours)),
            WorkedHours::NotComputed => write!(f, "-"),
        }
    }
}

impl TimeEntry {
    /// Creates an open entry starting at `start`.
    pub fn open(start: NaiveDateTime) -> Self {
        Self {
            id: None,
            employee_id: None,
            project_name: None,
            start,
            end: None,
            break_minutes: None,
            location: None,
        }
    }

    /// Creates a closed entry with the given break.
    pub fn closed(start: NaiveDateTime, end: NaiveDateTime, break_minutes: i64) -> Self {
        Self {
            end: Some(end),
            break_minutes: Some(break_minutes),
            ..Self::open(start)
        }
    }

    pub fn with_project(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Gross minutes minus break minutes; `None` while the entry is open.
    pub fn net_minutes(&self) -> Option<i64> {
        self.end
            .map(|end| end.signed_duration_since(self.start).num_minutes() - self.break_minutes.unwrap_or(0))
    }

    pub fn net_duration(&self) -> Option<Duration> {
        self.net_minutes().map(Duration::minutes)
    }

    pub fn worked_hours(&self) -> WorkedHours {
        match self.net_minutes() {
            Some(minutes) => WorkedHours::Computed(round_hours(minutes_to_hours(minutes))),
            None => WorkedHours::NotComputed,
        }
    }
}
