//! Instant Handling
//!
//! Parsing, formatting and composing the absolute points in time that
//! countdowns aim at. Stored instants are always UTC.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

use super::error::{DomainError, DomainResult};

/// Naive layouts accepted after RFC 3339, read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored or shared date string into a UTC instant.
///
/// Accepts RFC 3339 with any offset, a naive date-time (treated as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_instant(text: &str) -> DomainResult<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::Validation("date is required".to_string()));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Validation(format!("'{}' is not a valid date", text)))
}

/// Canonical text form: RFC 3339, UTC, millisecond precision
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable target, e.g. `January 5, 2025, 3:04 PM`
pub fn format_target<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format("%B %-d, %Y, %-I:%M %p").to_string()
}

/// Combine a form's calendar date (`YYYY-MM-DD`) and 24-hour time (`HH:MM`)
/// in the given zone into a UTC instant.
pub fn compose_target<Tz: TimeZone>(zone: &Tz, date: &str, time: &str) -> DomainResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::Validation("date is required".to_string()))?;

    let time = time.trim();
    let well_formed = time.len() == 5 && time.as_bytes()[2] == b':';
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .ok()
        .filter(|_| well_formed)
        .ok_or_else(|| {
            DomainError::Validation("please enter a valid time in the format HH:MM".to_string())
        })?;

    zone.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| DomainError::Validation(format!("{} {} does not exist in local time", date, time)))
}

/// Serde adapter storing instants in their canonical text form
pub(crate) mod iso_instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_instant(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_instant(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use rstest::rstest;

    #[rstest]
    #[case("2025-01-05T15:04:00.000Z")]
    #[case("2025-01-05T15:04:00Z")]
    #[case("2025-01-05T16:04:00+01:00")]
    #[case("2025-01-05T15:04")]
    #[case("2025-01-05T15:04:00")]
    #[case("2025-01-05 15:04")]
    fn test_parse_instant_accepts(#[case] text: &str) {
        let expected = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(parse_instant(text).unwrap(), expected);
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        let parsed = parse_instant("2025-03-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("tomorrow")]
    #[case("2025-13-01")]
    fn test_parse_instant_rejects(#[case] text: &str) {
        assert!(matches!(parse_instant(text), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_format_instant_uses_millis_and_z() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_instant(&instant), "2025-01-05T15:04:00.000Z");
    }

    #[test]
    fn test_format_target() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_target(&instant), "January 5, 2025, 3:04 PM");
    }

    #[test]
    fn test_compose_target_in_offset_zone() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let composed = compose_target(&zone, "2025-06-10", "09:30").unwrap();
        assert_eq!(composed, Utc.with_ymd_and_hms(2025, 6, 10, 7, 30, 0).unwrap());
    }

    #[rstest]
    #[case("2025-06-10", "24:00")]
    #[case("2025-06-10", "9:30")]
    #[case("2025-06-10", "09:3")]
    #[case("", "09:30")]
    fn test_compose_target_rejects(#[case] date: &str, #[case] time: &str) {
        assert!(matches!(compose_target(&Utc, date, time), Err(DomainError::Validation(_))));
    }
}
