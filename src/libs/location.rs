//! Check-in location classification and the check-in history rows.
//!
//! Free-text locations are matched case-insensitively against an ordered
//! keyword table. The first matching rule wins, so "Home Office" is remote
//! work even though it also contains "office".

use super::entry::{CheckInRecord, WorkedHours};
use serde::Serialize;
use std::fmt;

/// Label for a missing or blank location.
pub const UNKNOWN_LOCATION: &str = "Unbekannt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationKind {
    Remote,
    Office,
    Customer,
}

impl LocationKind {
    pub fn label(&self) -> &'static str {
        match self {
            LocationKind::Remote => "Remote",
            LocationKind::Office => "Büro",
            LocationKind::Customer => "Kunde",
        }
    }
}

// Order matters: first match wins.
const RULES: [(LocationKind, &[&str]); 3] = [
    (LocationKind::Remote, &["home", "remote", "zuhause", "mobil"]),
    (LocationKind::Office, &["büro", "buero", "office", "hq", "zentrale"]),
    (LocationKind::Customer, &["kunde", "customer", "client", "vor ort", "on-site", "onsite"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CheckInLocation {
    Known(LocationKind),
    /// Unmatched input, kept verbatim.
    Other(String),
    Unknown,
}

impl CheckInLocation {
    pub fn label(&self) -> &str {
        match self {
            CheckInLocation::Known(kind) => kind.label(),
            CheckInLocation::Other(text) => text,
            CheckInLocation::Unknown => UNKNOWN_LOCATION,
        }
    }
}

impl fmt::Display for CheckInLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn classify(location: Option<&str>) -> CheckInLocation {
    let text = match location {
        Some(text) if !text.trim().is_empty() => text,
        _ => return CheckInLocation::Unknown,
    };
    let lowered = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(kind, _)| CheckInLocation::Known(*kind))
        .unwrap_or_else(|| CheckInLocation::Other(text.to_string()))
}

/// One rendered line of the check-in history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckIn {
    pub entry: CheckInRecord,
    pub location: CheckInLocation,
    #[serde(skip)]
    pub worked: WorkedHours,
}

/// Classifies every record, keeping fetch order.
pub fn check_in_history(records: &[CheckInRecord]) -> Vec<CheckIn> {
    records
        .iter()
        .map(|record| CheckIn {
            location: classify(record.location.as_deref()),
            worked: record.worked_hours(),
            entry: record.clone(),
        })
        .collect()
}
