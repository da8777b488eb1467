#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zeitkonto::libs::entry::TimeEntry;
    use zeitkonto::libs::formatter::Tone;
    use zeitkonto::libs::week::{day_overview, week_overview, WeekRange, DEFAULT_TARGET_HOURS_PER_DAY};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday_for_any_weekday() {
        for day in 19..=25 {
            let date = NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
            assert_eq!(WeekRange::containing(date).monday, monday());
        }
        let range = WeekRange::containing(monday());
        assert_eq!(range.friday(), NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
        assert_eq!(range.weekdays().len(), 5);
    }

    #[test]
    fn test_full_day_is_complete() {
        let entries = vec![TimeEntry::closed(at(19, 9, 0), at(19, 17, 30), 30)];
        let day = day_overview(&entries, monday(), DEFAULT_TARGET_HOURS_PER_DAY);

        assert_eq!(day.minutes, 480);
        assert_eq!(day.hours, 8.0);
        assert!(day.complete);
    }

    #[test]
    fn test_day_boundaries_use_earliest_start_and_latest_end() {
        // Fetch order deliberately not chronological.
        let entries = vec![
            TimeEntry::closed(at(20, 13, 0), at(20, 17, 45), 0),
            TimeEntry::closed(at(20, 8, 15), at(20, 12, 0), 0),
        ];
        let day = day_overview(&entries, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), 8.0);

        assert_eq!(day.first_start, Some(at(20, 8, 15)));
        assert_eq!(day.last_end, Some(at(20, 17, 45)));
        assert_eq!(day.minutes, 225 + 285);
        assert!(day.complete);
    }

    #[test]
    fn test_open_entry_contributes_start_but_no_time() {
        let entries = vec![
            TimeEntry::closed(at(21, 8, 0), at(21, 12, 0), 0),
            TimeEntry::open(at(21, 13, 0)),
        ];
        let day = day_overview(&entries, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(), 8.0);

        assert_eq!(day.minutes, 240);
        assert_eq!(day.first_start, Some(at(21, 8, 0)));
        assert_eq!(day.last_end, Some(at(21, 12, 0)));
        assert!(!day.complete);
    }

    #[test]
    fn test_week_total_is_sum_of_days() {
        let entries = vec![
            TimeEntry::closed(at(19, 9, 0), at(19, 17, 30), 30),
            TimeEntry::closed(at(20, 9, 0), at(20, 15, 20), 0),
            TimeEntry::closed(at(22, 7, 0), at(22, 16, 10), 45),
        ];
        let week = week_overview(&entries, NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(), 8.0);

        let sum: f64 = week.days.iter().map(|day| day.hours).sum();
        assert!((week.total_hours - sum).abs() < 1e-9);
        assert_eq!(week.days.len(), 5);
        assert_eq!(week.target_hours, 40.0);
        assert!((week.delta_hours - (week.total_hours - 40.0)).abs() < 1e-9);
        assert_eq!(week.tone(), Tone::Negative);
        assert!(!week.is_empty());
    }

    #[test]
    fn test_weekend_entries_are_not_part_of_the_week() {
        let entries = vec![TimeEntry::closed(at(24, 10, 0), at(24, 14, 0), 0)];
        let week = week_overview(&entries, monday(), 8.0);

        assert_eq!(week.total_minutes(), 0);
        assert!(week.is_empty());
        assert!(week.days.iter().all(|day| !day.complete));
    }

    #[test]
    fn test_custom_target_changes_completion() {
        let entries = vec![TimeEntry::closed(at(19, 9, 0), at(19, 15, 0), 0)];
        let week = week_overview(&entries, monday(), 6.0);

        assert!(week.days[0].complete);
        assert_eq!(week.target_hours, 30.0);
    }

    #[test]
    fn test_rounded_days_add_up_to_total() {
        let entries: Vec<TimeEntry> = (19..=23).map(|day| TimeEntry::closed(at(day, 8, 0), at(day, 16, 2), 0)).collect();
        let week = week_overview(&entries, monday(), 8.0);

        assert!(week.days.iter().all(|day| day.hours == 8.0 && day.complete));
        assert_eq!(week.total_hours, 40.0);
        assert_eq!(week.delta_hours, 0.0);
        assert_eq!(week.total_minutes(), 5 * 482);
    }

    #[test]
    fn test_day_shown_as_target_is_complete() {
        let entries = vec![TimeEntry::closed(at(19, 8, 0), at(19, 15, 59), 0)];
        let day = day_overview(&entries, monday(), 8.0);

        assert_eq!(day.minutes, 479);
        assert_eq!(day.hours, 8.0);
        assert!(day.complete);
    }
}
