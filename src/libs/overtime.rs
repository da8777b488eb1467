//! Overtime ledger: balance, year-to-date split and recent movements.
//!
//! Every ledger entry carries signed hours. Positive entries accrue overtime,
//! negative entries reduce it. The balance spans the whole ledger, while the
//! accrued/reduced split only looks at the current calendar year.

use super::formatter::Tone;
use super::timestamp;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of movements shown as "recent".
pub const RECENT_MOVEMENTS: usize = 3;

/// One row of `overtime_entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub hours: f64,
    #[serde(with = "timestamp::required")]
    pub occurred_at: NaiveDateTime,
    #[serde(default)]
    pub reason: Option<String>,
}

impl OvertimeEntry {
    pub fn new(hours: f64, occurred_at: NaiveDateTime, reason: Option<String>) -> Self {
        Self {
            id: None,
            employee_id: None,
            hours,
            occurred_at,
            reason,
        }
    }
}

/// Display range for the balance indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub min: f64,
    pub max: f64,
}

impl Default for Corridor {
    fn default() -> Self {
        Corridor { min: -10.0, max: 10.0 }
    }
}

impl Corridor {
    /// Position of `balance` within the corridor in percent.
    ///
    /// Not clamped: balances outside the corridor land below 0 or above 100.
    /// A zero-width corridor yields 0.
    pub fn position(&self, balance: f64) -> f64 {
        let width = self.max - self.min;
        if width == 0.0 {
            return 0.0;
        }
        (balance - self.min) / width * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeSummary {
    pub year: i32,
    pub balance: f64,
    pub accrued_ytd: f64,
    pub reduced_ytd: f64,
    pub corridor: Corridor,
    pub corridor_position: f64,
    pub recent: Vec<OvertimeEntry>,
}

impl OvertimeSummary {
    pub fn tone(&self) -> Tone {
        Tone::of(self.balance)
    }
}

/// Reduces the ledger as seen on `today`.
pub fn summarize(entries: &[OvertimeEntry], today: NaiveDate, corridor: Corridor) -> OvertimeSummary {
    let year = today.year();
    let balance: f64 = entries.iter().map(|entry| entry.hours).sum();

    let this_year = || entries.iter().filter(|entry| entry.occurred_at.year() == year);
    let accrued_ytd: f64 = this_year().filter(|entry| entry.hours > 0.0).map(|entry| entry.hours).sum();
    let reduced_ytd: f64 = this_year().filter(|entry| entry.hours < 0.0).map(|entry| entry.hours.abs()).sum();

    OvertimeSummary {
        year,
        balance,
        accrued_ytd,
        reduced_ytd,
        corridor,
        corridor_position: corridor.position(balance),
        recent: recent_movements(entries, RECENT_MOVEMENTS),
    }
}

/// The `limit` latest entries by `occurred_at`, newest first.
///
/// Entries with the same timestamp keep their fetch order.
pub fn recent_movements(entries: &[OvertimeEntry], limit: usize) -> Vec<OvertimeEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    sorted.truncate(limit);
    sorted
}
