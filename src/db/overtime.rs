use super::{decode_row, decode_rows, encode_row, Query, RowStore, StoreError, Table};
use crate::libs::overtime::OvertimeEntry;

/// Typed access to `overtime_entries`, optionally scoped to one employee.
pub struct OvertimeEntries<'a, S: RowStore> {
    store: &'a S,
    employee_id: Option<String>,
}

impl<'a, S: RowStore> OvertimeEntries<'a, S> {
    pub fn new(store: &'a S, employee_id: Option<String>) -> Self {
        Self { store, employee_id }
    }

    /// The whole ledger, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<OvertimeEntry>, StoreError> {
        let query = Query::new()
            .eq_opt("employee_id", self.employee_id.as_deref())
            .order_by("occurred_at", false);
        decode_rows(self.store.fetch_rows(Table::OvertimeEntries, &query).await?)
    }

    pub async fn book(&self, entry: &OvertimeEntry) -> Result<OvertimeEntry, StoreError> {
        let mut entry = entry.clone();
        if entry.employee_id.is_none() {
            entry.employee_id = self.employee_id.clone();
        }
        decode_row(self.store.insert_row(Table::OvertimeEntries, encode_row(&entry)?).await?)
    }
}
