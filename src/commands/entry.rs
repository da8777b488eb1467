//! Recording of time entries.
//!
//! `start` opens an entry, `stop` closes it with an optional break and `add`
//! records a finished interval in one go. Entries are written through the
//! same store the summaries read from.

use super::{at_or_now, open_store, parse_at};
use crate::db::time_entries::TimeEntries;
use crate::libs::{entry::TimeEntry, messages::Message};
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: EntryCommand,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Open a new entry
    Start(StartArgs),
    /// Close an open entry
    Stop(StopArgs),
    /// Record a finished entry
    Add(AddArgs),
}

#[derive(Debug, Args)]
struct StartArgs {
    /// Start time, `HH:MM` or a full timestamp (defaults to now)
    #[arg(long, value_parser = parse_at)]
    at: Option<NaiveDateTime>,

    #[arg(long, short)]
    project: Option<String>,

    /// Free-text check-in location, e.g. "Home Office"
    #[arg(long, short)]
    location: Option<String>,
}

#[derive(Debug, Args)]
struct StopArgs {
    id: i64,

    /// End time, `HH:MM` or a full timestamp (defaults to now)
    #[arg(long, value_parser = parse_at)]
    at: Option<NaiveDateTime>,

    /// Break in minutes
    #[arg(long = "break", short)]
    break_minutes: Option<i64>,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long, value_parser = parse_at)]
    start: NaiveDateTime,

    #[arg(long, value_parser = parse_at)]
    end: NaiveDateTime,

    /// Break in minutes
    #[arg(long = "break", short, default_value_t = 0)]
    break_minutes: i64,

    #[arg(long, short)]
    project: Option<String>,

    #[arg(long, short)]
    location: Option<String>,
}

pub async fn cmd(args: EntryArgs) -> Result<()> {
    let (config, store) = open_store()?;
    let entries = TimeEntries::new(&store, config.employee_id());

    match args.command {
        EntryCommand::Start(start) => {
            let mut entry = TimeEntry::open(at_or_now(start.at));
            entry.project_name = start.project;
            entry.location = start.location;
            let stored = entries.insert(&entry).await?;
            msg_success!(Message::EntryStarted(stored.id.unwrap_or_default()));
        }
        EntryCommand::Stop(stop) => {
            let Some(entry) = entries.fetch_by_id(stop.id).await? else {
                msg_bail_anyhow!(Message::EntryNotFound(stop.id));
            };
            if !entry.is_open() {
                msg_bail_anyhow!(Message::EntryAlreadyClosed(stop.id));
            }
            let stored = entries.stop(stop.id, at_or_now(stop.at), stop.break_minutes).await?;
            if stored.net_minutes().is_some_and(|minutes| minutes < 0) {
                msg_warning!(Message::EntryNegativeDuration(stop.id));
            }
            msg_success!(Message::EntryStopped(stop.id, stored.worked_hours().to_string()));
        }
        EntryCommand::Add(add) => {
            let mut entry = TimeEntry::closed(add.start, add.end, add.break_minutes);
            entry.project_name = add.project;
            entry.location = add.location;
            let stored = entries.insert(&entry).await?;
            msg_success!(Message::EntryAdded(stored.id.unwrap_or_default()));
        }
    }
    Ok(())
}
