//! Week overview command.
//!
//! Fetches the entries of the Monday-to-Friday span around the given date
//! and prints one row per weekday followed by the weekly rollup.

use super::{date_or_today, open_store, parse_date};
use crate::db::time_entries::TimeEntries;
use crate::libs::{view::View, week::{week_overview, WeekRange}};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any day of the week to show (YYYY-MM-DD, DD.MM.YYYY or 'today')
    #[arg(long, short, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Target hours per day, overriding the configuration
    #[arg(long, short)]
    target: Option<f64>,
}

pub async fn cmd(args: WeekArgs) -> Result<()> {
    let (config, store) = open_store()?;
    let today = date_or_today(args.date);
    let target = args.target.unwrap_or(config.tracking().target_hours_per_day);

    let range = WeekRange::containing(today);
    let entries = TimeEntries::new(&store, config.employee_id())
        .fetch_range(range.start_bound(), range.end_bound())
        .await?;

    View::week(&week_overview(&entries, today, target));
    Ok(())
}
