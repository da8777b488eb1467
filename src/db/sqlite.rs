//! Local SQLite store with the same tables as the hosted backend.
//!
//! Rows are translated column by column between SQLite values and JSON, so
//! records round-trip through the same serde definitions either way.

use super::{validate_column, FilterOp, Query, Row, RowStore, StoreError, Table};
use crate::libs::timestamp::canonical;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection};
use serde_json::{Number, Value};
use std::path::Path;

const SCHEMA_TIME_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS time_entries (
    id INTEGER PRIMARY KEY,
    employee_id TEXT,
    project_name TEXT,
    started_at TEXT NOT NULL,
    ended_at TEXT,
    break_minutes INTEGER,
    location TEXT
);";
const SCHEMA_OVERTIME_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS overtime_entries (
    id INTEGER PRIMARY KEY,
    employee_id TEXT,
    hours REAL NOT NULL,
    occurred_at TEXT NOT NULL,
    reason TEXT
);";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(SCHEMA_TIME_ENTRIES, [])?;
        conn.execute(SCHEMA_OVERTIME_ENTRIES, [])?;
        Ok(SqliteStore { conn })
    }

    fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        query.validate()?;

        let mut sql = format!("SELECT * FROM \"{}\"", table.name());
        let mut params = Vec::with_capacity(query.filters.len());
        for (index, filter) in query.filters.iter().enumerate() {
            let op = match (filter.op, &filter.value) {
                (FilterOp::Eq, Value::Null) => {
                    sql.push_str(if index == 0 { " WHERE " } else { " AND " });
                    sql.push_str(&format!("\"{}\" IS NULL", filter.column));
                    continue;
                }
                (FilterOp::Eq, _) => "=",
                (FilterOp::Gte, _) => ">=",
                (FilterOp::Lt, _) => "<",
            };
            sql.push_str(if index == 0 { " WHERE " } else { " AND " });
            params.push(to_sql(&bound_value(table, &filter.column, &filter.value)));
            sql.push_str(&format!("{} {} ?{}", column_expr(table, &filter.column), op, params.len()));
        }
        if let Some(order) = &query.order {
            let direction = if order.ascending { "ASC" } else { "DESC" };
            sql.push_str(&format!(
                " ORDER BY {} {}, id {}",
                column_expr(table, &order.column),
                direction,
                direction
            ));
        }
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|name| name.to_string()).collect();
        let mut rows = stmt.query(params_from_iter(params))?;

        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut map = Row::new();
            for (index, column) in columns.iter().enumerate() {
                map.insert(column.clone(), from_sql(row.get_ref(index)?));
            }
            result.push(map);
        }
        Ok(result)
    }

    fn select_by_id(&self, table: Table, id: i64) -> Result<Row, StoreError> {
        self.select(table, &Query::new().eq("id", id))?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound { table: table.name(), id })
    }
}

impl RowStore for SqliteStore {
    async fn fetch_rows(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        let rows = self.select(table, query)?;
        tracing::debug!(table = table.name(), rows = rows.len(), "fetched rows from local store");
        Ok(rows)
    }

    async fn insert_row(&self, table: Table, mut row: Row) -> Result<Row, StoreError> {
        row.remove("id");
        row.keys().try_for_each(|column| validate_column(column))?;
        canonicalize(table, &mut row);

        let columns: Vec<String> = row.keys().map(|column| format!("\"{}\"", column)).collect();
        let placeholders: Vec<String> = (1..=row.len()).map(|index| format!("?{}", index)).collect();
        let sql = if row.is_empty() {
            format!("INSERT INTO \"{}\" DEFAULT VALUES", table.name())
        } else {
            format!(
                "INSERT INTO \"{}\" ({}) VALUES ({})",
                table.name(),
                columns.join(", "),
                placeholders.join(", ")
            )
        };
        self.conn.execute(&sql, params_from_iter(row.values().map(to_sql)))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(table = table.name(), id, "inserted row into local store");
        self.select_by_id(table, id)
    }

    async fn mutate_row(&self, table: Table, id: i64, mut patch: Row) -> Result<Row, StoreError> {
        patch.remove("id");
        if !patch.is_empty() {
            patch.keys().try_for_each(|column| validate_column(column))?;
            canonicalize(table, &mut patch);

            let assignments: Vec<String> = patch
                .keys()
                .enumerate()
                .map(|(index, column)| format!("\"{}\" = ?{}", column, index + 1))
                .collect();
            let sql = format!(
                "UPDATE \"{}\" SET {} WHERE id = ?{}",
                table.name(),
                assignments.join(", "),
                patch.len() + 1
            );
            let mut params: Vec<SqlValue> = patch.values().map(to_sql).collect();
            params.push(SqlValue::Integer(id));

            if self.conn.execute(&sql, params_from_iter(params))? == 0 {
                return Err(StoreError::NotFound { table: table.name(), id });
            }
            tracing::debug!(table = table.name(), id, columns = patch.len(), "updated row in local store");
        }
        self.select_by_id(table, id)
    }
}

/// Stores timestamp columns in the canonical local form.
fn canonicalize(table: Table, row: &mut Row) {
    for (column, value) in row.iter_mut() {
        if !table.is_timestamp_column(column) {
            continue;
        }
        if let Some(normalised) = value.as_str().and_then(canonical) {
            *value = Value::String(normalised);
        }
    }
}

/// Filter value as compared in SQL; timestamp bounds are canonicalised.
fn bound_value(table: Table, column: &str, value: &Value) -> Value {
    match value.as_str() {
        Some(text) if table.is_timestamp_column(column) => {
            canonical(text).map(Value::String).unwrap_or_else(|| value.clone())
        }
        _ => value.clone(),
    }
}

/// Column expression for comparisons. Timestamp columns written by other
/// tools may use a space separator or carry an offset, so only the
/// `YYYY-MM-DDTHH:MM:SS` part is compared.
fn column_expr(table: Table, column: &str) -> String {
    if table.is_timestamp_column(column) {
        format!("replace(substr(\"{}\", 1, 19), ' ', 'T')", column)
    } else {
        format!("\"{}\"", column)
    }
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(flag) => SqlValue::Integer(*flag as i64),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => SqlValue::Integer(integer),
            None => SqlValue::Real(number.as_f64().unwrap_or_default()),
        },
        Value::String(text) => SqlValue::Text(text.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

fn from_sql(value: ValueRef) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(integer) => Value::from(integer),
        ValueRef::Real(real) => Number::from_f64(real).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(_) => Value::Null,
    }
}
