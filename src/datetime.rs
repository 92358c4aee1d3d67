//! Date/time utilities for Noticeboard.
//!
//! Timestamps live in memory as `DateTime<Utc>` with microsecond precision,
//! are stored as fixed-width UTC text, and are shown to clients as local
//! wall-clock time with second precision and no offset.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::{NoticeboardError, Result};

/// Storage format. Fixed width so lexical order matches chronological order.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Wall-clock format used in board responses.
pub const VIEW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current time truncated to the precision that survives a storage round trip.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}

/// Encode a timestamp for storage.
pub fn to_storage(dt: &DateTime<Utc>) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}

/// Decode a stored timestamp.
///
/// Accepts the storage format (any RFC3339 string) as well as the plain
/// SQLite `YYYY-MM-DD HH:MM:SS` form, which is read as UTC.
pub fn from_storage(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    Err(NoticeboardError::Database(format!(
        "invalid stored timestamp: {s}"
    )))
}

/// Convert a UTC timestamp to wall-clock time in `tz`, dropping sub-second precision.
pub fn to_local(dt: &DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    let local = dt.with_timezone(&tz).naive_local();
    local.with_nanosecond(0).unwrap_or(local)
}

/// Serde adapter rendering `NaiveDateTime` in [`VIEW_FORMAT`].
pub mod view_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::VIEW_FORMAT;

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&dt.format(VIEW_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, VIEW_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_microsecond_precision() {
        let dt = now();
        assert_eq!(dt.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_storage_round_trip() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        let stored = to_storage(&dt);
        assert_eq!(stored, "2024-01-15T10:30:00.123456Z");
        assert_eq!(from_storage(&stored).unwrap(), dt);
    }

    #[test]
    fn test_storage_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let fraction = whole + chrono::Duration::microseconds(5);
        assert_eq!(to_storage(&whole).len(), to_storage(&fraction).len());
        assert!(to_storage(&whole) < to_storage(&fraction));
    }

    #[test]
    fn test_from_storage_sqlite_format() {
        let dt = from_storage("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_from_storage_invalid() {
        let result = from_storage("not a date");
        assert!(matches!(result, Err(NoticeboardError::Database(_))));
    }

    #[test]
    fn test_to_local_seoul() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let local = to_local(&dt, chrono_tz::Asia::Seoul);
        assert_eq!(local.format(VIEW_FORMAT).to_string(), "2024-01-15T19:30:00"); // UTC+9
    }

    #[test]
    fn test_to_local_crosses_midnight() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 5).unwrap();
        let local = to_local(&dt, chrono_tz::Asia::Seoul);
        assert_eq!(local.format(VIEW_FORMAT).to_string(), "2025-01-01T05:00:05");
    }

    #[test]
    fn test_view_format_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "view_format")]
            at: NaiveDateTime,
        }

        let at = NaiveDateTime::parse_from_str("2024-03-01 08:09:10", "%Y-%m-%d %H:%M:%S").unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2024-03-01T08:09:10"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
    }
}
