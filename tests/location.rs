#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zeitkonto::libs::entry::{TimeEntry, WorkedHours};
    use zeitkonto::libs::location::{check_in_history, classify, CheckInLocation, LocationKind};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_home_office_is_remote() {
        assert_eq!(classify(Some("Home Office")), CheckInLocation::Known(LocationKind::Remote));
        assert_eq!(classify(Some("Home Office")).label(), "Remote");
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(classify(Some("BÜRO Berlin")), CheckInLocation::Known(LocationKind::Office));
        assert_eq!(classify(Some("zentrale")), CheckInLocation::Known(LocationKind::Office));
        assert_eq!(classify(Some("Kunde Müller GmbH")), CheckInLocation::Known(LocationKind::Customer));
        assert_eq!(classify(Some("vor Ort")).label(), "Kunde");
    }

    #[test]
    fn test_missing_or_blank_location_is_unknown() {
        assert_eq!(classify(None), CheckInLocation::Unknown);
        assert_eq!(classify(Some("   ")), CheckInLocation::Unknown);
        assert_eq!(classify(None).to_string(), "Unbekannt");
    }

    #[test]
    fn test_unmatched_text_is_kept_verbatim() {
        assert_eq!(classify(Some(" Bahn ")), CheckInLocation::Other(" Bahn ".to_string()));
        assert_eq!(classify(Some("Bahn")).label(), "Bahn");
    }

    #[test]
    fn test_classification_is_deterministic() {
        for input in ["Home Office", "Office", "Kunde", "Bahn"] {
            assert_eq!(classify(Some(input)), classify(Some(input)));
        }
    }

    #[test]
    fn test_history_keeps_order_and_marks_open_entries() {
        let records = vec![
            TimeEntry::open(at(13, 0)).with_location("Büro"),
            TimeEntry::closed(at(8, 0), at(12, 30), 30).with_location("Home Office"),
        ];
        let history = check_in_history(&records);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].location.label(), "Büro");
        assert_eq!(history[0].worked, WorkedHours::NotComputed);
        assert_eq!(history[1].location.label(), "Remote");
        assert_eq!(history[1].worked, WorkedHours::Computed(4.0));
    }
}
