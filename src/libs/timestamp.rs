//! Timestamp parsing and serde adapters for store rows.
//!
//! A hosted store hands back RFC 3339 strings with an offset
//! (`2026-10-19T09:00:00+02:00`), while the local SQLite store and
//! hand-written rows may carry naive `YYYY-MM-DD HH:MM:SS` text. Both are
//! normalised to local wall-clock `NaiveDateTime`, which is what every
//! aggregation compares and groups by.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parses a store timestamp into local wall-clock time.
///
/// Offsets are honoured by converting to the local zone; naive values are
/// taken as already local.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Formats a local wall-clock time for writing back to a store.
///
/// The local offset is attached when it is unambiguous so a hosted store
/// with `timestamptz` columns keeps the correct instant. Times that fall
/// into a DST gap or overlap are written naive.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    match Local.from_local_datetime(value).single() {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, false),
        None => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

/// Rewrites any accepted timestamp as local `YYYY-MM-DDTHH:MM:SS`.
///
/// Values in this form order correctly as plain text, which is what the
/// local store relies on for range filters and sorting.
pub fn canonical(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(CANONICAL_FORMAT).to_string())
}

/// Serde adapter for required timestamp fields.
pub mod required {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{}`", raw)))
    }
}

/// Serde adapter for nullable timestamp fields.
pub mod optional {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{}`", raw))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_naive_variants() {
        assert_eq!(parse_timestamp("2026-10-19T09:00:00"), Some(at(9, 0)));
        assert_eq!(parse_timestamp("2026-10-19 09:00:00"), Some(at(9, 0)));
        assert_eq!(parse_timestamp("2026-10-19T17:30"), Some(at(17, 30)));
        assert_eq!(parse_timestamp(" 2026-10-19 08:15 "), Some(at(8, 15)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("gestern"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn canonical_form_is_shared_by_all_inputs() {
        for raw in ["2026-10-19 09:00:00", "2026-10-19T09:00", "2026-10-19 09:00", "2026-10-19T09:00:00.000"] {
            assert_eq!(canonical(raw).as_deref(), Some("2026-10-19T09:00:00"));
        }
        assert_eq!(canonical(&format_timestamp(&at(9, 0))).as_deref(), Some("2026-10-19T09:00:00"));
        assert_eq!(canonical("n/a"), None);
    }

    #[test]
    fn formatted_timestamps_parse_back() {
        let value = at(13, 45);
        assert_eq!(parse_timestamp(&format_timestamp(&value)), Some(value));
    }
}
