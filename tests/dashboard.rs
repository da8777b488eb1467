#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zeitkonto::db::sqlite::SqliteStore;
    use zeitkonto::db::overtime::OvertimeEntries;
    use zeitkonto::db::time_entries::TimeEntries;
    use zeitkonto::db::{Query, Row, RowStore, StoreError, Table};
    use zeitkonto::libs::config::TrackingConfig;
    use zeitkonto::libs::dashboard::{month_bounds, Dashboard};
    use zeitkonto::libs::entry::TimeEntry;
    use zeitkonto::libs::overtime::OvertimeEntry;
    use zeitkonto::libs::status::Section;
    use test_context::{test_context, AsyncTestContext};

    /// Local store whose reads fail for one table.
    struct FlakyStore {
        inner: SqliteStore,
        failing: Option<Table>,
    }

    impl RowStore for FlakyStore {
        async fn fetch_rows(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
            if self.failing == Some(table) {
                return Err(StoreError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            self.inner.fetch_rows(table, query).await
        }

        async fn insert_row(&self, table: Table, row: Row) -> Result<Row, StoreError> {
            self.inner.insert_row(table, row).await
        }

        async fn mutate_row(&self, table: Table, id: i64, patch: Row) -> Result<Row, StoreError> {
            self.inner.mutate_row(table, id, patch).await
        }
    }

    struct DashboardTestContext {
        store: FlakyStore,
        today: NaiveDate,
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    impl AsyncTestContext for DashboardTestContext {
        async fn setup() -> Self {
            DashboardTestContext {
                store: FlakyStore {
                    inner: SqliteStore::in_memory().unwrap(),
                    failing: None,
                },
                today: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            }
        }
    }

    async fn seed(store: &FlakyStore) {
        let entries = TimeEntries::new(store, None);
        entries
            .insert(&TimeEntry::closed(at(19, 9, 0), at(19, 17, 30), 30).with_project("Portal").with_location("Home Office"))
            .await
            .unwrap();
        entries
            .insert(&TimeEntry::closed(at(2, 8, 0), at(2, 10, 0), 0).with_project("Intranet").with_location("Büro"))
            .await
            .unwrap();
        entries.insert(&TimeEntry::open(at(20, 8, 0)).with_location("Kunde")).await.unwrap();

        let ledger = OvertimeEntries::new(store, None);
        ledger.book(&OvertimeEntry::new(2.5, at(1, 12, 0), None)).await.unwrap();
        ledger.book(&OvertimeEntry::new(-1.0, at(5, 12, 0), None)).await.unwrap();
    }

    #[test]
    fn test_fresh_dashboard_is_loading() {
        let dashboard = Dashboard::loading();

        assert!(dashboard.is_loading());
        assert!(dashboard.first_error().is_none());
    }

    #[test]
    fn test_month_bounds() {
        let (first, next) = month_bounds(NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());

        assert_eq!(first, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(next, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }

    #[test_context(DashboardTestContext)]
    #[tokio::test]
    async fn test_all_sections_ready(ctx: &mut DashboardTestContext) {
        seed(&ctx.store).await;
        let dashboard = Dashboard::load(&ctx.store, &TrackingConfig::default(), ctx.today).await;

        assert!(!dashboard.is_loading());
        assert!(dashboard.first_error().is_none());

        let week = dashboard.week.ready().unwrap();
        assert_eq!(week.total_hours, 8.0);
        assert!(week.days[0].complete);

        let overtime = dashboard.overtime.ready().unwrap();
        assert!((overtime.balance - 1.5).abs() < 1e-9);

        let projects = dashboard.projects.ready().unwrap();
        assert_eq!(projects.total_hours, 10.0);
        assert_eq!(projects.shares[0].name, "Portal");

        let check_ins = dashboard.check_ins.ready().unwrap();
        assert_eq!(check_ins.len(), 3);
        assert_eq!(check_ins[0].location.label(), "Kunde");
    }

    #[test_context(DashboardTestContext)]
    #[tokio::test]
    async fn test_failed_section_does_not_affect_others(ctx: &mut DashboardTestContext) {
        seed(&ctx.store).await;
        ctx.store.failing = Some(Table::OvertimeEntries);

        let dashboard = Dashboard::load(&ctx.store, &TrackingConfig::default(), ctx.today).await;

        assert!(matches!(dashboard.overtime, Section::Failed(_)));
        assert!(dashboard.week.ready().is_some());
        assert!(dashboard.projects.ready().is_some());
        assert!(dashboard.check_ins.ready().is_some());
        assert!(!dashboard.is_loading());
        assert!(dashboard.first_error().unwrap().contains("503"));
    }

    #[test_context(DashboardTestContext)]
    #[tokio::test]
    async fn test_first_error_follows_section_order(ctx: &mut DashboardTestContext) {
        seed(&ctx.store).await;
        ctx.store.failing = Some(Table::TimeEntries);

        let dashboard = Dashboard::load(&ctx.store, &TrackingConfig::default(), ctx.today).await;

        assert!(dashboard.week.error().is_some());
        assert!(dashboard.projects.error().is_some());
        assert!(dashboard.check_ins.error().is_some());
        assert!(dashboard.overtime.ready().is_some());
        assert_eq!(dashboard.first_error(), dashboard.week.error());
    }
}
