//! Overtime balance and booking commands.

use super::{at_or_now, date_or_today, open_store, parse_at, parse_date};
use crate::db::overtime::OvertimeEntries;
use crate::libs::{
    formatter::format_signed_hours,
    messages::Message,
    overtime::{summarize, OvertimeEntry},
    view::View,
};
use crate::msg_success;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct OvertimeArgs {
    /// Reference date; selects the year of the accrued/reduced split
    #[arg(long, short, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct BookArgs {
    /// Signed hours: positive accrues, negative reduces
    #[arg(long, allow_hyphen_values = true)]
    hours: f64,

    /// Reason shown in the movement list
    #[arg(long, short)]
    reason: Option<String>,

    /// When the movement happened (defaults to now)
    #[arg(long, value_parser = parse_at)]
    at: Option<NaiveDateTime>,
}

pub async fn cmd(args: OvertimeArgs) -> Result<()> {
    let (config, store) = open_store()?;
    let tracking = config.tracking();

    let entries = OvertimeEntries::new(&store, tracking.employee_id.clone()).fetch_all().await?;
    View::overtime(&summarize(&entries, date_or_today(args.date), tracking.corridor()));
    Ok(())
}

pub async fn book(args: BookArgs) -> Result<()> {
    let (config, store) = open_store()?;

    let entry = OvertimeEntry::new(args.hours, at_or_now(args.at), args.reason);
    let booked = OvertimeEntries::new(&store, config.employee_id()).book(&entry).await?;

    msg_success!(Message::OvertimeBooked(format_signed_hours(booked.hours)));
    Ok(())
}
