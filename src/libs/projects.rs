//! Project-time distribution.
//!
//! Closed entries are grouped by project name, open entries are skipped
//! entirely. Shares are computed from exact minute sums; only the displayed
//! hours are rounded.

use super::entry::ProjectTimeEntry;
use super::formatter::{minutes_to_hours, round_hours};
use serde::Serialize;
use std::collections::BTreeMap;

/// Grouping key for entries without a project.
pub const UNASSIGNED_PROJECT: &str = "Nicht zugeordnet";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectShare {
    pub name: String,
    pub minutes: i64,
    /// Rounded to one decimal.
    pub hours: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDistribution {
    pub shares: Vec<ProjectShare>,
    pub total_minutes: i64,
    pub total_hours: f64,
}

impl ProjectDistribution {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

fn project_key(entry: &ProjectTimeEntry) -> &str {
    match entry.project_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => UNASSIGNED_PROJECT,
    }
}

/// Groups closed entries by project, sorted by hours descending.
///
/// Equal totals are ordered by project name.
pub fn distribute(entries: &[ProjectTimeEntry]) -> ProjectDistribution {
    let mut minutes_by_project: BTreeMap<&str, i64> = BTreeMap::new();
    for entry in entries {
        if let Some(minutes) = entry.net_minutes() {
            *minutes_by_project.entry(project_key(entry)).or_insert(0) += minutes;
        }
    }

    let total_minutes: i64 = minutes_by_project.values().sum();

    let mut shares: Vec<ProjectShare> = minutes_by_project
        .into_iter()
        .map(|(name, minutes)| ProjectShare {
            name: name.to_string(),
            minutes,
            hours: round_hours(minutes_to_hours(minutes)),
            percentage: if total_minutes == 0 {
                0.0
            } else {
                minutes as f64 / total_minutes as f64 * 100.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.minutes.cmp(&a.minutes));

    ProjectDistribution {
        shares,
        total_minutes,
        total_hours: round_hours(minutes_to_hours(total_minutes)),
    }
}
