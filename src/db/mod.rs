//! Store layer for the zeitkonto application.
//!
//! All data lives in an external table store that is treated as an opaque
//! collaborator. It is reached through the [`RowStore`] trait, which speaks
//! in untyped JSON rows:
//!
//! - `fetch_rows(table, query)`: select rows by filters, order and limit
//! - `insert_row(table, row)`: create one row, returning it with its id
//! - `mutate_row(table, id, patch)`: update one row, returning the new state
//!
//! Two implementations exist. [`rest::RestStore`] talks to a hosted
//! PostgREST-style backend; [`sqlite::SqliteStore`] keeps the same tables in a
//! local SQLite file. [`Backend`] picks one from the configuration.
//!
//! Typed access for the two tables sits on top in [`time_entries`] and
//! [`overtime`].
//!
//! ```rust,no_run
//! use zeitkonto::db::{Backend, time_entries::TimeEntries};
//! use zeitkonto::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let store = Backend::open(&config)?;
//! let open_entries = TimeEntries::new(&store, None).fetch_recent(10).await?;
//! # Ok(())
//! # }
//! ```

pub mod overtime;
pub mod rest;
pub mod sqlite;
pub mod time_entries;

use crate::libs::{config::Config, data_storage::DataStorage, messages::Message};
use crate::msg_debug;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DB_FILE_NAME: &str = "zeitkonto.db";

/// A row as exchanged with the store: column name to JSON value.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    TimeEntries,
    OvertimeEntries,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::TimeEntries => "time_entries",
            Table::OvertimeEntries => "overtime_entries",
        }
    }

    /// Columns holding timestamps.
    pub fn timestamp_columns(&self) -> &'static [&'static str] {
        match self {
            Table::TimeEntries => &["started_at", "ended_at"],
            Table::OvertimeEntries => &["occurred_at"],
        }
    }

    pub fn is_timestamp_column(&self, column: &str) -> bool {
        self.timestamp_columns().contains(&column)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Anfrage an den Speicher fehlgeschlagen: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Speicher antwortete mit Status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Lokaler Speicher: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Datensatz konnte nicht gelesen werden: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API-Schlüssel ist kein gültiger Header-Wert")]
    InvalidApiKey,
    #[error("Ungültiger Spaltenname: {0}")]
    InvalidColumn(String),
    #[error("Datensatz {id} in {table} nicht gefunden")]
    NotFound { table: &'static str, id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Selection criteria for `fetch_rows`. Filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter(mut self, column: &str, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Eq, value)
    }

    pub fn gte(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gte, value)
    }

    pub fn lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lt, value)
    }

    /// Adds an equality filter only when a value is present.
    pub fn eq_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.eq(column, value),
            None => self,
        }
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects column names that are not plain identifiers.
    pub fn validate(&self) -> Result<(), StoreError> {
        self.filters
            .iter()
            .map(|filter| filter.column.as_str())
            .chain(self.order.iter().map(|order| order.column.as_str()))
            .try_for_each(validate_column)
    }
}

/// Column names must match `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_column(column: &str) -> Result<(), StoreError> {
    let mut chars = column.chars();
    let valid = match chars.next() {
        Some(first) => (first.is_ascii_alphabetic() || first == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidColumn(column.to_string()))
    }
}

/// Generic table access. Mutations are single-row and unconditional.
#[allow(async_fn_in_trait)]
pub trait RowStore {
    async fn fetch_rows(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError>;
    async fn insert_row(&self, table: Table, row: Row) -> Result<Row, StoreError>;
    async fn mutate_row(&self, table: Table, id: i64, patch: Row) -> Result<Row, StoreError>;
}

/// The store selected by configuration.
pub enum Backend {
    Rest(rest::RestStore),
    Local(sqlite::SqliteStore),
}

impl Backend {
    /// Uses the hosted backend when configured, otherwise the local SQLite file.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        match &config.backend {
            Some(backend) => {
                msg_debug!(Message::ConfigUsingBackend(backend.api_url.clone()));
                Ok(Backend::Rest(rest::RestStore::new(backend)))
            }
            None => {
                let path = DataStorage::new().get_path(DB_FILE_NAME)?;
                msg_debug!(Message::ConfigUsingLocalStore(path.display().to_string()));
                Ok(Backend::Local(sqlite::SqliteStore::open(&path)?))
            }
        }
    }
}

impl RowStore for Backend {
    async fn fetch_rows(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        match self {
            Backend::Rest(store) => store.fetch_rows(table, query).await,
            Backend::Local(store) => store.fetch_rows(table, query).await,
        }
    }

    async fn insert_row(&self, table: Table, row: Row) -> Result<Row, StoreError> {
        match self {
            Backend::Rest(store) => store.insert_row(table, row).await,
            Backend::Local(store) => store.insert_row(table, row).await,
        }
    }

    async fn mutate_row(&self, table: Table, id: i64, patch: Row) -> Result<Row, StoreError> {
        match self {
            Backend::Rest(store) => store.mutate_row(table, id, patch).await,
            Backend::Local(store) => store.mutate_row(table, id, patch).await,
        }
    }
}

/// Decodes fetched rows into typed records.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>, StoreError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(StoreError::from))
        .collect()
}

pub fn decode_row<T: DeserializeOwned>(row: Row) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

/// Encodes a record as a row. Non-object values yield an empty row.
pub fn encode_row<T: Serialize>(record: &T) -> Result<Row, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(row) => Ok(row),
        _ => Ok(Row::new()),
    }
}
