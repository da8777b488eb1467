//! Hosted table store reached over a PostgREST-style HTTP API.
//!
//! Requests follow the usual dialect of such backends:
//!
//! ```text
//! GET   {api_url}/rest/v1/time_entries?select=*&started_at=gte.2026-10-19T00:00:00+02:00&order=started_at.asc
//! POST  {api_url}/rest/v1/time_entries              (Prefer: return=representation)
//! PATCH {api_url}/rest/v1/time_entries?id=eq.42     (Prefer: return=representation)
//! ```
//!
//! Every request carries the project key both as `apikey` and as a bearer
//! token. Any non-success status becomes [`StoreError::Status`] with the
//! response body as message. There are no retries.

use super::{validate_column, FilterOp, Query, Row, RowStore, StoreError, Table};
use crate::libs::config::BackendConfig;
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde_json::Value;

const REST_PATH: &str = "rest/v1";
const PREFER_REPRESENTATION: &str = "return=representation";

pub struct RestStore {
    client: Client,
    config: BackendConfig,
}

impl RestStore {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn table_url(&self, table: Table) -> String {
        format!("{}/{}/{}", self.config.api_url.trim_end_matches('/'), REST_PATH, table.name())
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let invalid = |_: InvalidHeaderValue| StoreError::InvalidApiKey;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.config.api_key).map_err(invalid)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)).map_err(invalid)?,
        );
        Ok(headers)
    }

    fn request(&self, builder: RequestBuilder) -> Result<RequestBuilder, StoreError> {
        Ok(builder.headers(self.headers()?))
    }

    async fn rows(response: Response) -> Result<Vec<Row>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Vec<Row>>().await?)
    }
}

/// Translates a query into PostgREST URL parameters.
pub fn query_pairs(query: &Query) -> Result<Vec<(String, String)>, StoreError> {
    query.validate()?;

    let mut pairs = vec![("select".to_string(), "*".to_string())];
    for filter in &query.filters {
        let condition = match (filter.op, &filter.value) {
            (FilterOp::Eq, Value::Null) => "is.null".to_string(),
            (FilterOp::Eq, value) => format!("eq.{}", plain(value)),
            (FilterOp::Gte, value) => format!("gte.{}", plain(value)),
            (FilterOp::Lt, value) => format!("lt.{}", plain(value)),
        };
        pairs.push((filter.column.clone(), condition));
    }
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        pairs.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    if let Some(limit) = query.limit {
        pairs.push(("limit".to_string(), limit.to_string()));
    }
    Ok(pairs)
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl RowStore for RestStore {
    async fn fetch_rows(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        let pairs = query_pairs(query)?;
        let response = self.request(self.client.get(self.table_url(table)).query(&pairs))?.send().await?;
        let rows = Self::rows(response).await?;
        tracing::debug!(table = table.name(), rows = rows.len(), "fetched rows from backend");
        Ok(rows)
    }

    async fn insert_row(&self, table: Table, mut row: Row) -> Result<Row, StoreError> {
        row.remove("id");
        row.keys().try_for_each(|column| validate_column(column))?;

        let response = self
            .request(self.client.post(self.table_url(table)))?
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&row)
            .send()
            .await?;
        let created = Self::rows(response).await?.into_iter().next();
        tracing::debug!(table = table.name(), "inserted row into backend");
        created.ok_or(StoreError::Status {
            status: 0,
            body: "backend returned no representation".to_string(),
        })
    }

    async fn mutate_row(&self, table: Table, id: i64, mut patch: Row) -> Result<Row, StoreError> {
        patch.remove("id");
        patch.keys().try_for_each(|column| validate_column(column))?;

        let response = self
            .request(self.client.patch(self.table_url(table)).query(&[("id", format!("eq.{}", id))]))?
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&patch)
            .send()
            .await?;
        let updated = Self::rows(response).await?.into_iter().next();
        tracing::debug!(table = table.name(), id, "updated row in backend");
        updated.ok_or(StoreError::NotFound { table: table.name(), id })
    }
}
