//! Composite dashboard command.
//!
//! All four sections are loaded concurrently and rendered independently. A
//! section that failed to load is shown as an error line while the others
//! still render; the command only fails afterwards, with the first error.

use super::{date_or_today, open_store, parse_date};
use crate::libs::{dashboard::Dashboard, view::View};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Reference date (defaults to today)
    #[arg(long, short, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

pub async fn cmd(args: DashboardArgs) -> Result<()> {
    let (config, store) = open_store()?;
    let today = date_or_today(args.date);

    let dashboard = Dashboard::load(&store, &config.tracking(), today).await;
    View::dashboard(&dashboard, &today);

    match dashboard.first_error() {
        Some(reason) => Err(msg_error_anyhow!(reason)),
        None => Ok(()),
    }
}
