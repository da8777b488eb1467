//! Export of the derived summaries to CSV and JSON.
//!
//! Exports contain the computed values, not the raw entries: one row per
//! weekday plus a total row for the week, one row per project, and the
//! overtime balance followed by its recent movements. Hours are written as
//! plain numbers rounded to one decimal so spreadsheets can sum them.
//!
//! ```rust,no_run
//! use zeitkonto::libs::export::{ExportData, ExportFormat, Exporter};
//! use zeitkonto::libs::projects::distribute;
//! use chrono::NaiveDate;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let path = exporter.write_projects(&distribute(&[]), date)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::{format_date, format_optional_clock, round_hours};
use super::overtime::OvertimeSummary;
use super::projects::ProjectDistribution;
use super::week::WeekOverview;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Week,
    Projects,
    Overtime,
}

impl ExportData {
    pub fn name(&self) -> &'static str {
        match self {
            ExportData::Week => "week",
            ExportData::Projects => "projects",
            ExportData::Overtime => "overtime",
        }
    }
}

#[derive(Debug, Serialize)]
struct WeekRow {
    day: String,
    first_start: String,
    last_end: String,
    hours: f64,
    complete: bool,
}

#[derive(Debug, Serialize)]
struct ProjectRow<'a> {
    project: &'a str,
    hours: f64,
    percentage: f64,
}

#[derive(Debug, Serialize)]
struct OvertimeRow {
    date: String,
    hours: f64,
    reason: String,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Explicit output path, or `zeitkonto_<data>_<YYYYMMDD>.<ext>` in the working directory.
    pub fn output_path(&self, data: ExportData, date: NaiveDate) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "zeitkonto_{}_{}.{}",
                data.name(),
                date.format("%Y%m%d"),
                self.format.extension()
            ))
        })
    }

    pub fn write_week(&self, week: &WeekOverview, date: NaiveDate) -> Result<PathBuf> {
        let path = self.output_path(ExportData::Week, date);
        match self.format {
            ExportFormat::Json => fs::write(&path, serde_json::to_string_pretty(week)?)?,
            ExportFormat::Csv => {
                let mut rows: Vec<WeekRow> = week
                    .days
                    .iter()
                    .map(|day| WeekRow {
                        day: format_date(&day.date),
                        first_start: format_optional_clock(day.first_start.as_ref()),
                        last_end: format_optional_clock(day.last_end.as_ref()),
                        hours: day.hours,
                        complete: day.complete,
                    })
                    .collect();
                rows.push(WeekRow {
                    day: "total".to_string(),
                    first_start: String::new(),
                    last_end: String::new(),
                    hours: week.total_hours,
                    complete: week.delta_hours >= 0.0,
                });
                write_csv(&path, &rows)?;
            }
        }
        Ok(path)
    }

    pub fn write_projects(&self, distribution: &ProjectDistribution, date: NaiveDate) -> Result<PathBuf> {
        let path = self.output_path(ExportData::Projects, date);
        match self.format {
            ExportFormat::Json => fs::write(&path, serde_json::to_string_pretty(distribution)?)?,
            ExportFormat::Csv => {
                let rows: Vec<ProjectRow> = distribution
                    .shares
                    .iter()
                    .map(|share| ProjectRow {
                        project: &share.name,
                        hours: share.hours,
                        percentage: round_hours(share.percentage),
                    })
                    .collect();
                write_csv(&path, &rows)?;
            }
        }
        Ok(path)
    }

    pub fn write_overtime(&self, summary: &OvertimeSummary, date: NaiveDate) -> Result<PathBuf> {
        let path = self.output_path(ExportData::Overtime, date);
        match self.format {
            ExportFormat::Json => fs::write(&path, serde_json::to_string_pretty(summary)?)?,
            ExportFormat::Csv => {
                let mut rows = vec![OvertimeRow {
                    date: format_date(&date),
                    hours: round_hours(summary.balance),
                    reason: "balance".to_string(),
                }];
                rows.extend(summary.recent.iter().map(|entry| OvertimeRow {
                    date: format_date(&entry.occurred_at.date()),
                    hours: entry.hours,
                    reason: entry.reason.clone().unwrap_or_default(),
                }));
                write_csv(&path, &rows)?;
            }
        }
        Ok(path)
    }
}

fn write_csv<T: Serialize>(path: &PathBuf, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
