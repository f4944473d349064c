// Date utility functions
// Timestamp parsing and day truncation shared by the filter, grid and export code

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Zone-less date-time layouts accepted from the events API.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an API timestamp, reading zone-less values in the local time zone.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(raw, &Local)
}

/// Parse an API timestamp into a UTC instant.
///
/// * RFC 3339 with an offset or `Z` keeps its instant.
/// * A bare `YYYY-MM-DD` is midnight UTC.
/// * A zone-less date-time is wall-clock time in `tz`.
///
/// Returns `None` when nothing matches.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Calendar day of `instant` as seen from `tz` (the instant truncated to midnight).
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Compact UTC basic format used by iCalendar and Google Calendar (`YYYYMMDDTHHMMSSZ`).
pub fn format_utc_basic(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn test_parse_rfc3339_utc() {
        let parsed = parse_timestamp_in("2024-03-15T18:00:00Z", &Utc).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp_in("2024-03-15T18:00:00+02:00", &Utc).unwrap();
        assert_eq!(parsed.hour(), 16);
    }

    #[test]
    fn test_parse_date_only_is_midnight_utc() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let parsed = parse_timestamp_in("2024-03-15", &tz).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_uses_zone() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let parsed = parse_timestamp_in("2024-03-15T18:30", &tz).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 17, 30, 0).unwrap());

        let spaced = parse_timestamp_in("2024-03-15 18:30:00", &tz).unwrap();
        assert_eq!(spaced, parsed);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp_in("next tuesday", &Utc).is_none());
        assert!(parse_timestamp_in("", &Utc).is_none());
        assert!(parse_timestamp_in("2024-13-40", &Utc).is_none());
    }

    #[test]
    fn test_local_day_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_day(&instant, &tz),
            NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
        );
    }

    #[test]
    fn test_format_utc_basic() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
        assert_eq!(format_utc_basic(&instant), "20240315T180000Z");
    }
}
