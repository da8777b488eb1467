#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zeitkonto::libs::entry::{TimeEntry, WorkedHours};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_net_hours_subtract_break() {
        let entry = TimeEntry::closed(at(9, 0), at(17, 30), 30);

        assert_eq!(entry.net_minutes(), Some(480));
        assert_eq!(entry.worked_hours(), WorkedHours::Computed(8.0));
        assert_eq!(entry.worked_hours().to_string(), "8.0h");
    }

    #[test]
    fn test_missing_break_counts_as_zero() {
        let mut entry = TimeEntry::closed(at(8, 0), at(12, 15), 0);
        entry.break_minutes = None;

        assert_eq!(entry.net_minutes(), Some(255));
        assert_eq!(entry.worked_hours().hours(), Some(4.3));
    }

    #[test]
    fn test_open_entry_is_not_computed() {
        let entry = TimeEntry::open(at(9, 0));

        assert!(entry.is_open());
        assert_eq!(entry.net_minutes(), None);
        assert_eq!(entry.worked_hours(), WorkedHours::NotComputed);
        assert_eq!(entry.worked_hours().to_string(), "-");
    }

    #[test]
    fn test_break_longer_than_presence_goes_negative() {
        let entry = TimeEntry::closed(at(9, 0), at(9, 30), 60);

        assert_eq!(entry.net_minutes(), Some(-30));
        assert_eq!(entry.worked_hours().hours(), Some(-0.5));
    }
}
