#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zeitkonto::libs::entry::TimeEntry;
    use zeitkonto::libs::export::{ExportData, ExportFormat, Exporter};
    use zeitkonto::libs::overtime::{summarize, Corridor, OvertimeEntry};
    use zeitkonto::libs::projects::distribute;
    use zeitkonto::libs::week::week_overview;

    struct ExportTestContext {
        temp_dir: TempDir,
        date: NaiveDate,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            }
        }
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let path = exporter.output_path(ExportData::Projects, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        assert_eq!(path.to_str(), Some("zeitkonto_projects_20261019.json"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_week_csv(ctx: &mut ExportTestContext) {
        let entries = vec![TimeEntry::closed(at(19, 9, 0), at(19, 17, 30), 30)];
        let week = week_overview(&entries, ctx.date, 8.0);

        let output = ctx.temp_dir.path().join("week.csv");
        let path = Exporter::new(ExportFormat::Csv, Some(output.clone())).write_week(&week, ctx.date).unwrap();

        assert_eq!(path, output);
        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "day,first_start,last_end,hours,complete");
        assert_eq!(lines[1], "19.10.2026,09:00,17:30,8.0,true");
        assert_eq!(lines[2], "20.10.2026,-,-,0.0,false");
        assert_eq!(lines.len(), 7);
        assert!(lines[6].starts_with("total,,,8.0,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_week_csv_rows_add_up_to_total(ctx: &mut ExportTestContext) {
        let entries: Vec<TimeEntry> = (19..=23).map(|day| TimeEntry::closed(at(day, 8, 0), at(day, 16, 2), 0)).collect();
        let week = week_overview(&entries, ctx.date, 8.0);

        let output = ctx.temp_dir.path().join("full_week.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone())).write_week(&week, ctx.date).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[1..6].iter().all(|line| line.ends_with(",8.0,true")));
        assert_eq!(lines[6], "total,,,40.0,true");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_projects_json(ctx: &mut ExportTestContext) {
        let entries = vec![
            TimeEntry::closed(at(19, 8, 0), at(19, 14, 0), 0).with_project("Portal"),
            TimeEntry::closed(at(19, 14, 0), at(19, 16, 0), 0).with_project("Intranet"),
        ];

        let output = ctx.temp_dir.path().join("projects.json");
        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .write_projects(&distribute(&entries), ctx.date)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["total_hours"], 8.0);
        assert_eq!(json["shares"][0]["name"], "Portal");
        assert_eq!(json["shares"][0]["percentage"], 75.0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_overtime_csv(ctx: &mut ExportTestContext) {
        let ledger = vec![
            OvertimeEntry::new(2.5, at(1, 12, 0), Some("release".to_string())),
            OvertimeEntry::new(-1.0, at(5, 12, 0), None),
        ];
        let summary = summarize(&ledger, ctx.date, Corridor::default());

        let output = ctx.temp_dir.path().join("overtime.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone()))
            .write_overtime(&summary, ctx.date)
            .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,hours,reason");
        assert_eq!(lines[1], "19.10.2026,1.5,balance");
        assert_eq!(lines[2], "05.10.2026,-1.0,");
        assert_eq!(lines[3], "01.10.2026,2.5,release");
    }
}
