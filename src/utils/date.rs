// Timestamp parsing and relative/absolute time formatting

use crate::models::Locale;
use crate::utils::duration::{format_duration_ms_in, PLACEHOLDER};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_DAY: i64 = 86_400;
/// Relative units stop at one week; older timestamps render as an absolute date
const SECS_PER_WEEK: i64 = 604_800;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Empty timestamp")]
    Empty,
    #[error("Unrecognized timestamp: {0}")]
    Unrecognized(String),
    #[error("Timestamp does not exist in the local timezone: {0}")]
    NonexistentLocal(String),
}

const YEAR_DIGITS: usize = 4;
/// Shorter digit strings are never treated as epoch milliseconds (10 digits is Apr 1970)
const MIN_EPOCH_MS_DIGITS: usize = 10;

/// Naive formats are interpreted in the local timezone
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp as emitted by the EZ server and its clients
///
/// Supported forms:
/// - RFC 3339 with offset: `2026-01-10T14:30:00+08:00`, `2026-01-10T06:30:00Z`
/// - Naive local date-time (ISO or SQLite style): `2026-01-10T14:30:00.123456`, `2026-01-10 14:30:00`
/// - Date only (UTC midnight): `2026-01-10`
/// - Year only (UTC midnight, Jan 1): `2026`
/// - Unix epoch milliseconds, 10 digits or more: `1768026600000`
pub fn parse_timestamp(expr: &str) -> Result<DateTime<Utc>, TimestampError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(TimestampError::Empty);
    }

    if expr.bytes().all(|b| b.is_ascii_digit()) {
        return parse_digits(expr);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(expr, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(expr, format) {
            // DST overlaps resolve to the earlier instant
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| TimestampError::NonexistentLocal(expr.to_string()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(TimestampError::Unrecognized(expr.to_string()))
}

/// Digit-only input: a bare year (UTC midnight, Jan 1) or epoch milliseconds
fn parse_digits(expr: &str) -> Result<DateTime<Utc>, TimestampError> {
    let unrecognized = || TimestampError::Unrecognized(expr.to_string());
    match expr.len() {
        YEAR_DIGITS => {
            let year: i32 = expr.parse().map_err(|_| unrecognized())?;
            NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| Utc.from_utc_datetime(&midnight))
                .ok_or_else(unrecognized)
        }
        len if len >= MIN_EPOCH_MS_DIGITS => expr
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(unrecognized),
        _ => Err(unrecognized()),
    }
}

/// Parse an optional timestamp, treating missing, empty and unparseable input alike
fn parse_optional(expr: Option<&str>) -> Option<DateTime<Utc>> {
    let expr = expr?;
    match parse_timestamp(expr) {
        Ok(dt) => Some(dt),
        Err(TimestampError::Empty) => None,
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    }
}

/// Format the elapsed time between two timestamps ("-" if either is missing)
pub fn format_duration(started: Option<&str>, finished: Option<&str>) -> String {
    format_duration_in(started, finished, Locale::ZhCn)
}

pub fn format_duration_in(started: Option<&str>, finished: Option<&str>, locale: Locale) -> String {
    match (parse_optional(started), parse_optional(finished)) {
        (Some(start), Some(end)) => format_duration_ms_in((end - start).num_milliseconds(), locale),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Absolute local date-time in the locale's conventional layout
pub fn format_local_datetime(dt: DateTime<Utc>, locale: Locale) -> String {
    let local = dt.with_timezone(&Local);
    match locale {
        Locale::ZhCn => local.format("%Y/%-m/%-d %H:%M:%S").to_string(),
        Locale::En => local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    }
}

/// Format how long ago a timestamp was (e.g. "5分钟前"), relative to now
pub fn format_time_ago(timestamp: Option<&str>) -> String {
    format_time_ago_at(timestamp, Utc::now(), Locale::ZhCn)
}

pub fn format_time_ago_in(timestamp: Option<&str>, locale: Locale) -> String {
    format_time_ago_at(timestamp, Utc::now(), locale)
}

/// Format how long before `now` a timestamp was
///
/// Uses the largest unit among seconds, minutes, hours and days that fits; a
/// week or more falls back to the absolute local date-time. Timestamps in the
/// future count as zero seconds ago.
pub fn format_time_ago_at(timestamp: Option<&str>, now: DateTime<Utc>, locale: Locale) -> String {
    let Some(then) = parse_optional(timestamp) else {
        return PLACEHOLDER.to_string();
    };

    let diff_secs = (now - then).num_milliseconds().div_euclid(1000).max(0);
    if diff_secs >= SECS_PER_WEEK {
        return format_local_datetime(then, locale);
    }

    match locale {
        Locale::ZhCn => {
            if diff_secs < SECS_PER_MINUTE {
                format!("{}秒前", diff_secs)
            } else if diff_secs < SECS_PER_HOUR {
                format!("{}分钟前", diff_secs / SECS_PER_MINUTE)
            } else if diff_secs < SECS_PER_DAY {
                format!("{}小时前", diff_secs / SECS_PER_HOUR)
            } else {
                format!("{}天前", diff_secs / SECS_PER_DAY)
            }
        }
        Locale::En => {
            if diff_secs < SECS_PER_MINUTE {
                format!("{}s ago", diff_secs)
            } else if diff_secs < SECS_PER_HOUR {
                format!("{}m ago", diff_secs / SECS_PER_MINUTE)
            } else if diff_secs < SECS_PER_DAY {
                format!("{}h ago", diff_secs / SECS_PER_HOUR)
            } else {
                format!("{}d ago", diff_secs / SECS_PER_DAY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn utc(expr: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(expr).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2026-01-10T14:30:00+08:00").unwrap();
        assert_eq!(dt, utc("2026-01-10T06:30:00Z"));
        assert_eq!(parse_timestamp("2026-01-10T06:30:00Z").unwrap(), dt);
        assert_eq!(parse_timestamp("2026-01-10 14:30:00+08:00").unwrap(), dt);
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = parse_timestamp("1768026600000").unwrap();
        assert_eq!(dt, utc("2026-01-10T06:30:00Z"));
    }

    #[test]
    fn test_parse_year_only_is_utc_new_year() {
        assert_eq!(parse_timestamp("2026").unwrap(), utc("2026-01-01T00:00:00Z"));
        assert_eq!(parse_timestamp("1999").unwrap(), utc("1999-01-01T00:00:00Z"));
    }

    #[test]
    fn test_parse_short_digit_strings_are_not_epoch() {
        assert!(matches!(parse_timestamp("20260110"), Err(TimestampError::Unrecognized(_))));
        assert!(matches!(parse_timestamp("42"), Err(TimestampError::Unrecognized(_))));
        assert!(matches!(parse_timestamp("123456789"), Err(TimestampError::Unrecognized(_))));
        assert_eq!(parse_timestamp("1000000000").unwrap(), utc("1970-01-12T13:46:40Z"));
    }

    #[test]
    fn test_format_time_ago_year_only() {
        let now = utc("2026-01-03T12:00:00Z");
        assert_eq!(format_time_ago_at(Some("2026"), now, Locale::ZhCn), "2天前");
    }

    #[test]
    fn test_parse_naive_is_local() {
        let naive = NaiveDateTime::parse_from_str("2026-01-10 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let expected = Local.from_local_datetime(&naive).earliest().unwrap().with_timezone(&Utc);
        assert_eq!(parse_timestamp("2026-01-10 14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-01-10T14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-01-10T14:30").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2026-01-10T14:30:00.250000").unwrap(),
            expected + Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parse_date_only_is_utc_midnight() {
        assert_eq!(parse_timestamp("2026-01-10").unwrap(), utc("2026-01-10T00:00:00Z"));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_timestamp("   "), Err(TimestampError::Empty));
        assert!(matches!(parse_timestamp("yesterday"), Err(TimestampError::Unrecognized(_))));
        assert!(matches!(parse_timestamp("2026-13-45"), Err(TimestampError::Unrecognized(_))));
    }

    #[test]
    fn test_format_duration_between() {
        assert_eq!(
            format_duration(Some("2026-01-10T06:30:00Z"), Some("2026-01-10T06:32:05Z")),
            "2分5秒"
        );
        assert_eq!(format_duration(None, Some("2026-01-10T06:30:00Z")), "-");
        assert_eq!(format_duration(Some("2026-01-10T06:30:00Z"), None), "-");
        assert_eq!(format_duration(Some(""), Some("2026-01-10T06:30:00Z")), "-");
        assert_eq!(format_duration(Some("garbage"), Some("2026-01-10T06:30:00Z")), "-");
    }

    #[test]
    fn test_format_duration_negative_is_placeholder() {
        assert_eq!(
            format_duration(Some("2026-01-10T06:32:00Z"), Some("2026-01-10T06:30:00Z")),
            "-"
        );
    }

    #[test]
    fn test_format_time_ago_units() {
        let now = utc("2026-01-10T12:00:00Z");
        let ago = |secs: i64| (now - Duration::seconds(secs)).to_rfc3339();

        assert_eq!(format_time_ago_at(Some(&ago(0)), now, Locale::ZhCn), "0秒前");
        assert_eq!(format_time_ago_at(Some(&ago(59)), now, Locale::ZhCn), "59秒前");
        assert_eq!(format_time_ago_at(Some(&ago(60)), now, Locale::ZhCn), "1分钟前");
        assert_eq!(format_time_ago_at(Some(&ago(3599)), now, Locale::ZhCn), "59分钟前");
        assert_eq!(format_time_ago_at(Some(&ago(7200)), now, Locale::ZhCn), "2小时前");
        assert_eq!(format_time_ago_at(Some(&ago(3 * 86_400)), now, Locale::ZhCn), "3天前");
        assert_eq!(format_time_ago_at(Some(&ago(604_799)), now, Locale::ZhCn), "6天前");
        assert_eq!(format_time_ago_at(Some(&ago(90)), now, Locale::En), "1m ago");
    }

    #[test]
    fn test_format_time_ago_floors_partial_seconds() {
        let now = utc("2026-01-10T12:00:00Z");
        let then = (now - Duration::milliseconds(1999)).to_rfc3339();
        assert_eq!(format_time_ago_at(Some(&then), now, Locale::ZhCn), "1秒前");
    }

    #[test]
    fn test_format_time_ago_future_clamps_to_zero() {
        let now = utc("2026-01-10T12:00:00Z");
        let later = (now + Duration::seconds(30)).to_rfc3339();
        assert_eq!(format_time_ago_at(Some(&later), now, Locale::ZhCn), "0秒前");
    }

    #[test]
    fn test_format_time_ago_beyond_week_is_absolute() {
        let now = utc("2026-01-10T12:00:00Z");
        let then = now - Duration::days(8);
        let rendered = format_time_ago_at(Some(&then.to_rfc3339()), now, Locale::ZhCn);
        assert_eq!(rendered, format_local_datetime(then, Locale::ZhCn));
        assert!(!rendered.contains('前'));
        assert!(rendered.starts_with("2026/1/"));
    }

    #[test]
    fn test_format_time_ago_missing() {
        let now = Utc::now();
        assert_eq!(format_time_ago_at(None, now, Locale::ZhCn), "-");
        assert_eq!(format_time_ago_at(Some(""), now, Locale::En), "-");
        assert_eq!(format_time_ago_at(Some("not a date"), now, Locale::ZhCn), "-");
    }

    #[test]
    fn test_format_local_datetime_layouts() {
        let naive = NaiveDateTime::parse_from_str("2026-03-05 09:07:08", "%Y-%m-%d %H:%M:%S").unwrap();
        let dt = Local.from_local_datetime(&naive).earliest().unwrap().with_timezone(&Utc);
        assert_eq!(format_local_datetime(dt, Locale::ZhCn), "2026/3/5 09:07:08");
        assert_eq!(format_local_datetime(dt, Locale::En), "3/5/2026, 9:07:08 AM");
    }
}
