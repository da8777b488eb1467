pub mod checkins;
pub mod dashboard;
pub mod entry;
pub mod export;
pub mod init;
pub mod overtime;
pub mod projects;
pub mod week;

use crate::db::Backend;
use crate::libs::{config::Config, messages::Message, timestamp::parse_timestamp};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the hours of the current week")]
    Week(week::WeekArgs),
    #[command(about = "Show the overtime balance")]
    Overtime(overtime::OvertimeArgs),
    #[command(about = "Book overtime hours (negative hours reduce the balance)")]
    OvertimeBook(overtime::BookArgs),
    #[command(about = "Show how worked time is distributed over projects")]
    Projects(projects::ProjectsArgs),
    #[command(about = "Show the check-in history")]
    Checkins(checkins::CheckinsArgs),
    #[command(about = "Show week, overtime, projects and check-ins at once")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Record time entries", arg_required_else_help = true)]
    Entry(entry::EntryArgs),
    #[command(about = "Export a summary to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Week(args) => week::cmd(args).await,
            Commands::Overtime(args) => overtime::cmd(args).await,
            Commands::OvertimeBook(args) => overtime::book(args).await,
            Commands::Projects(args) => projects::cmd(args).await,
            Commands::Checkins(args) => checkins::cmd(args).await,
            Commands::Dashboard(args) => dashboard::cmd(args).await,
            Commands::Entry(args) => entry::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Reads the configuration with environment overrides and opens its store.
pub(crate) fn open_store() -> Result<(Config, Backend)> {
    let config = Config::read()?.with_env_overrides();
    let store = Backend::open(&config)?;
    Ok((config, store))
}

/// Parses `today`, `YYYY-MM-DD` or `DD.MM.YYYY`.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .map_err(|_| Message::InvalidDate(value.to_string()).to_string())
}

/// Parses a full timestamp, or `HH:MM` meaning that time today.
pub fn parse_at(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Ok(Local::now().date_naive().and_time(time));
    }
    parse_timestamp(value).ok_or_else(|| Message::InvalidTimestamp(value.to_string()).to_string())
}

/// The given date or today.
pub(crate) fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// The given time or now, truncated to whole seconds.
pub(crate) fn at_or_now(at: Option<NaiveDateTime>) -> NaiveDateTime {
    at.unwrap_or_else(|| {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    })
}
