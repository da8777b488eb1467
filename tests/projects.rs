#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zeitkonto::libs::entry::TimeEntry;
    use zeitkonto::libs::projects::{distribute, UNASSIGNED_PROJECT};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_shares_and_totals() {
        let entries = vec![
            TimeEntry::closed(at(19, 8, 0), at(19, 12, 0), 0).with_project("Portal"),
            TimeEntry::closed(at(19, 13, 0), at(19, 15, 0), 0).with_project("Intranet"),
            TimeEntry::closed(at(20, 8, 0), at(20, 10, 0), 0).with_project("Portal"),
        ];
        let distribution = distribute(&entries);

        assert_eq!(distribution.total_hours, 8.0);
        assert_eq!(distribution.shares.len(), 2);
        assert_eq!(distribution.shares[0].name, "Portal");
        assert_eq!(distribution.shares[0].hours, 6.0);
        assert_eq!(distribution.shares[0].percentage, 75.0);
        assert_eq!(distribution.shares[1].name, "Intranet");
        assert_eq!(distribution.shares[1].percentage, 25.0);

        let sum: f64 = distribution.shares.iter().map(|share| share.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_has_no_shares_and_no_nan() {
        let distribution = distribute(&[]);

        assert!(distribution.is_empty());
        assert_eq!(distribution.total_hours, 0.0);
        assert_eq!(distribution.total_minutes, 0);
    }

    #[test]
    fn test_zero_total_yields_zero_percent() {
        let entries = vec![TimeEntry::closed(at(19, 9, 0), at(19, 9, 0), 0).with_project("Portal")];
        let distribution = distribute(&entries);

        assert_eq!(distribution.shares.len(), 1);
        assert_eq!(distribution.shares[0].percentage, 0.0);
        assert!(!distribution.shares[0].percentage.is_nan());
    }

    #[test]
    fn test_open_entries_are_skipped() {
        let entries = vec![
            TimeEntry::closed(at(19, 8, 0), at(19, 10, 0), 0).with_project("Portal"),
            TimeEntry::open(at(19, 11, 0)).with_project("Intranet"),
        ];
        let distribution = distribute(&entries);

        assert_eq!(distribution.shares.len(), 1);
        assert_eq!(distribution.shares[0].name, "Portal");
        assert_eq!(distribution.shares[0].percentage, 100.0);
    }

    #[test]
    fn test_missing_or_blank_project_is_unassigned() {
        let entries = vec![
            TimeEntry::closed(at(19, 8, 0), at(19, 9, 0), 0),
            TimeEntry::closed(at(19, 9, 0), at(19, 10, 0), 0).with_project("  "),
        ];
        let distribution = distribute(&entries);

        assert_eq!(distribution.shares.len(), 1);
        assert_eq!(distribution.shares[0].name, UNASSIGNED_PROJECT);
        assert_eq!(distribution.shares[0].hours, 2.0);
    }

    #[test]
    fn test_equal_totals_sorted_by_name() {
        let entries = vec![
            TimeEntry::closed(at(19, 8, 0), at(19, 9, 0), 0).with_project("Zeta"),
            TimeEntry::closed(at(19, 9, 0), at(19, 10, 0), 0).with_project("Alpha"),
        ];
        let names: Vec<String> = distribute(&entries).shares.into_iter().map(|share| share.name).collect();

        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
