//! Project-time distribution command.

use super::{date_or_today, open_store, parse_date};
use crate::db::time_entries::TimeEntries;
use crate::libs::{dashboard::month_bounds, projects::distribute, view::View};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// First day to include (defaults to the first of the current month)
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Last day to include (defaults to the end of the month of `from`)
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
}

pub async fn cmd(args: ProjectsArgs) -> Result<()> {
    let (config, store) = open_store()?;

    let (month_start, month_end) = month_bounds(args.from.unwrap_or_else(|| date_or_today(None)));
    let from = args.from.unwrap_or(month_start);
    let until = args.to.map(|to| to + Duration::days(1)).unwrap_or(month_end);

    let entries = TimeEntries::new(&store, config.employee_id())
        .fetch_range(from.and_time(NaiveTime::MIN), until.and_time(NaiveTime::MIN))
        .await?;

    View::projects(&distribute(&entries));
    Ok(())
}
