//! Composite work-time dashboard.
//!
//! Loads the four data categories concurrently, one store request each, and
//! keeps a separate [`Section`] per category. A failed request only affects
//! its own section.

use super::config::TrackingConfig;
use super::location::{check_in_history, CheckIn};
use super::overtime::{summarize, OvertimeSummary};
use super::projects::{distribute, ProjectDistribution};
use super::status::Section;
use super::week::{week_overview, WeekOverview, WeekRange};
use crate::db::{overtime::OvertimeEntries, time_entries::TimeEntries, RowStore};
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

/// Number of check-ins listed on the dashboard.
pub const DASHBOARD_CHECK_INS: usize = 10;

pub struct Dashboard {
    pub week: Section<WeekOverview>,
    pub overtime: Section<OvertimeSummary>,
    pub projects: Section<ProjectDistribution>,
    pub check_ins: Section<Vec<CheckIn>>,
}

/// First day of the month containing `date` and of the following month.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
    (first, next)
}

impl Dashboard {
    pub fn loading() -> Self {
        Dashboard {
            week: Section::Loading,
            overtime: Section::Loading,
            projects: Section::Loading,
            check_ins: Section::Loading,
        }
    }

    /// Fetches all sections concurrently as seen on `today`.
    ///
    /// Project time covers the calendar month of `today`.
    pub async fn load<S: RowStore>(store: &S, tracking: &TrackingConfig, today: NaiveDate) -> Self {
        let entries = TimeEntries::new(store, tracking.employee_id.clone());
        let ledger = OvertimeEntries::new(store, tracking.employee_id.clone());
        let range = WeekRange::containing(today);
        let (month_start, month_end) = month_bounds(today);

        let (week, overtime, projects, check_ins) = tokio::join!(
            entries.fetch_range(range.start_bound(), range.end_bound()),
            ledger.fetch_all(),
            entries.fetch_range(month_start.and_time(NaiveTime::MIN), month_end.and_time(NaiveTime::MIN)),
            entries.fetch_recent(DASHBOARD_CHECK_INS),
        );

        Dashboard {
            week: Section::from_result(week).map(|rows| week_overview(&rows, today, tracking.target_hours_per_day)),
            overtime: Section::from_result(overtime).map(|rows| summarize(&rows, today, tracking.corridor())),
            projects: Section::from_result(projects).map(|rows| distribute(&rows)),
            check_ins: Section::from_result(check_ins).map(|rows| check_in_history(&rows)),
        }
    }

    /// True while any section is still loading.
    pub fn is_loading(&self) -> bool {
        self.week.is_loading() || self.overtime.is_loading() || self.projects.is_loading() || self.check_ins.is_loading()
    }

    /// The first failure in section order: week, overtime, projects, check-ins.
    ///
    /// For callers that want one verdict for the whole view, e.g. the exit
    /// status of the dashboard command.
    pub fn first_error(&self) -> Option<&str> {
        self.week
            .error()
            .or_else(|| self.overtime.error())
            .or_else(|| self.projects.error())
            .or_else(|| self.check_ins.error())
    }
}
