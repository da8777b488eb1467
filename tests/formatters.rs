#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use zeitkonto::libs::formatter::*;

    #[test]
    fn test_hours_formatting() {
        assert_eq!(format_hours(8.0), "8.0h");
        assert_eq!(format_hours(round_hours(minutes_to_hours(500))), "8.3h");
        assert_eq!(format_hours(-0.5), "-0.5h");
    }

    #[test]
    fn test_signed_hours() {
        assert_eq!(format_signed_hours(1.5), "+1.5h");
        assert_eq!(format_signed_hours(0.0), "+0.0h");
        assert_eq!(format_signed_hours(-2.0), "-2.0h");
    }

    #[test]
    fn test_tone() {
        assert_eq!(Tone::of(0.0), Tone::Positive);
        assert_eq!(Tone::of(-0.1), Tone::Negative);
        assert_eq!(Tone::Positive.style_spec(), "Fg");
        assert_eq!(Tone::Negative.style_spec(), "Fr");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(-50.0), "-50.0%");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(495)), "08:15");
        assert_eq!(format_duration(&Duration::minutes(-30)), "-00:30");
        assert_eq!(format_duration(&Duration::minutes(-90)), "-01:30");
    }

    #[test]
    fn test_german_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let time = date.and_hms_opt(9, 5, 0).unwrap();

        assert_eq!(format_date(&date), "19.10.2026");
        assert_eq!(format_weekday(&date), "Mo 19.10.");
        assert_eq!(format_clock(&time), "09:05");
        assert_eq!(format_datetime(&time), "19.10.2026 09:05");
        assert_eq!(format_optional_clock(Some(&time)), "09:05");
        assert_eq!(format_optional_clock(None), "-");
    }
}
