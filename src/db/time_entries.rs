use super::{decode_row, decode_rows, encode_row, Query, Row, RowStore, StoreError, Table};
use crate::libs::entry::TimeEntry;
use crate::libs::timestamp::format_timestamp;
use chrono::NaiveDateTime;
use serde_json::Value;

const STARTED_AT: &str = "started_at";
const EMPLOYEE_ID: &str = "employee_id";

/// Typed access to `time_entries`, optionally scoped to one employee.
pub struct TimeEntries<'a, S: RowStore> {
    store: &'a S,
    employee_id: Option<String>,
}

impl<'a, S: RowStore> TimeEntries<'a, S> {
    pub fn new(store: &'a S, employee_id: Option<String>) -> Self {
        Self { store, employee_id }
    }

    fn scoped(&self) -> Query {
        Query::new().eq_opt(EMPLOYEE_ID, self.employee_id.as_deref())
    }

    /// Entries starting in `[from, to)`, oldest first.
    pub async fn fetch_range(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<TimeEntry>, StoreError> {
        let query = self
            .scoped()
            .gte(STARTED_AT, format_timestamp(&from))
            .lt(STARTED_AT, format_timestamp(&to))
            .order_by(STARTED_AT, true);
        decode_rows(self.store.fetch_rows(Table::TimeEntries, &query).await?)
    }

    /// The latest `limit` entries, newest first.
    pub async fn fetch_recent(&self, limit: usize) -> Result<Vec<TimeEntry>, StoreError> {
        let query = self.scoped().order_by(STARTED_AT, false).limit(limit);
        decode_rows(self.store.fetch_rows(Table::TimeEntries, &query).await?)
    }

    /// Looks up one entry within the employee scope.
    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<TimeEntry>, StoreError> {
        let query = self.scoped().eq("id", id);
        let mut entries: Vec<TimeEntry> = decode_rows(self.store.fetch_rows(Table::TimeEntries, &query).await?)?;
        Ok(entries.pop())
    }

    /// Stores an entry, stamping it with the scoped employee when it has none.
    pub async fn insert(&self, entry: &TimeEntry) -> Result<TimeEntry, StoreError> {
        let mut entry = entry.clone();
        if entry.employee_id.is_none() {
            entry.employee_id = self.employee_id.clone();
        }
        decode_row(self.store.insert_row(Table::TimeEntries, encode_row(&entry)?).await?)
    }

    /// Closes an entry at `end`, optionally recording its break.
    pub async fn stop(&self, id: i64, end: NaiveDateTime, break_minutes: Option<i64>) -> Result<TimeEntry, StoreError> {
        let mut patch = Row::new();
        patch.insert("ended_at".to_string(), Value::String(format_timestamp(&end)));
        if let Some(minutes) = break_minutes {
            patch.insert("break_minutes".to_string(), Value::from(minutes));
        }
        decode_row(self.store.mutate_row(Table::TimeEntries, id, patch).await?)
    }
}
