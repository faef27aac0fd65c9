//! Display formatting for timestamps, durations and labels.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::error::SectionError;

const DATETIME_DISPLAY: &str = "%b %-d, %Y, %-I:%M %p";
const DATE_DISPLAY: &str = "%B %-d, %Y";
const TIME_DISPLAY: &str = "%-I:%M %p";

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn invalid(field: &'static str, raw: &str) -> SectionError {
    SectionError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    }
}

fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses an ISO-like timestamp. Offsets are honoured; naive values and
/// plain dates are taken as UTC.
pub fn parse_instant(field: &'static str, raw: &str) -> Result<DateTime<Utc>, SectionError> {
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Ok(naive.and_utc());
    }
    parse_date_only(value)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .ok_or_else(|| invalid(field, raw))
}

/// Formats an instant in the display timezone, e.g. `Jan 5, 2026, 6:00 PM`.
#[must_use]
pub fn format_datetime(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DATETIME_DISPLAY).to_string()
}

/// Parses and formats a timestamp field.
pub fn timestamp_field(field: &'static str, raw: &str, tz: Tz) -> Result<String, SectionError> {
    parse_instant(field, raw).map(|instant| format_datetime(instant, tz))
}

/// Formats a calendar date field, e.g. `January 5, 2026`.
///
/// Plain dates are shown as given; full timestamps are first moved into
/// the display timezone.
pub fn date_field(field: &'static str, raw: &str, tz: Tz) -> Result<String, SectionError> {
    if let Some(date) = parse_date_only(raw.trim()) {
        return Ok(date.format(DATE_DISPLAY).to_string());
    }
    parse_instant(field, raw).map(|instant| {
        instant
            .with_timezone(&tz)
            .format(DATE_DISPLAY)
            .to_string()
    })
}

/// Formats a time-of-day field (`HH:MM` or `HH:MM:SS`), e.g. `2:30 PM`.
pub fn time_field(field: &'static str, raw: &str) -> Result<String, SectionError> {
    let value = raw.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(|time| time.format(TIME_DISPLAY).to_string())
        .map_err(|_| invalid(field, raw))
}

/// Calendar year of a timestamp field in the display timezone.
pub fn year_field(field: &'static str, raw: &str, tz: Tz) -> Result<i32, SectionError> {
    use chrono::Datelike;

    parse_instant(field, raw).map(|instant| instant.with_timezone(&tz).year())
}

/// Duration in hours, e.g. `1 hour`, `2.5 hours`.
#[must_use]
pub fn hours(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized == Decimal::ONE {
        "1 hour".to_string()
    } else {
        format!("{normalized} hours")
    }
}

/// Turns a machine value such as `same_day` into `Same Day`.
#[must_use]
pub fn humanize(raw: &str) -> String {
    raw.split(|ch: char| ch == '_' || ch == '-' || ch.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
