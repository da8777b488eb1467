//! Export command for the derived summaries.

use super::{date_or_today, open_store, parse_date};
use crate::db::{overtime::OvertimeEntries, time_entries::TimeEntries};
use crate::libs::{
    dashboard::month_bounds,
    export::{ExportData, ExportFormat, Exporter},
    messages::Message,
    overtime::summarize,
    projects::distribute,
    week::{week_overview, WeekRange},
};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Summary to export
    #[arg(value_enum, default_value = "week")]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file (defaults to zeitkonto_<data>_<date>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference date (defaults to today)
    #[arg(short, long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (config, store) = open_store()?;
    let tracking = config.tracking();
    let today = date_or_today(args.date);
    let exporter = Exporter::new(args.format, args.output);

    msg_info!(Message::ExportingData(
        args.data.name().to_string(),
        args.format.extension().to_string()
    ));

    let entries = TimeEntries::new(&store, tracking.employee_id.clone());
    let path = match args.data {
        ExportData::Week => {
            let range = WeekRange::containing(today);
            let rows = entries.fetch_range(range.start_bound(), range.end_bound()).await?;
            exporter.write_week(&week_overview(&rows, today, tracking.target_hours_per_day), today)?
        }
        ExportData::Projects => {
            let (from, until) = month_bounds(today);
            let rows = entries
                .fetch_range(from.and_time(NaiveTime::MIN), until.and_time(NaiveTime::MIN))
                .await?;
            exporter.write_projects(&distribute(&rows), today)?
        }
        ExportData::Overtime => {
            let rows = OvertimeEntries::new(&store, tracking.employee_id.clone()).fetch_all().await?;
            exporter.write_overtime(&summarize(&rows, today, tracking.corridor()), today)?
        }
    };

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
