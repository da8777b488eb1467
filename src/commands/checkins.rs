//! Check-in history command.

use super::open_store;
use crate::db::time_entries::TimeEntries;
use crate::libs::{location::check_in_history, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckinsArgs {
    /// Number of check-ins to list, newest first
    #[arg(long, short, default_value_t = 20)]
    limit: usize,
}

pub async fn cmd(args: CheckinsArgs) -> Result<()> {
    let (config, store) = open_store()?;

    let records = TimeEntries::new(&store, config.employee_id()).fetch_recent(args.limit).await?;
    View::check_ins(&check_in_history(&records));
    Ok(())
}
