use std::fmt::Display;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use crate::error::ClientError;

pub(crate) const CLI_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp as sent by the platform API.
///
/// Values without an offset are read as UTC, a bare date as midnight UTC.
pub(crate) fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, ClientError> {
    let trimmed = timestamp.trim();

    match expand_basic_format(trimmed) {
        Some(extended) => parse_extended(&extended),
        None => parse_extended(trimmed),
    }
    .ok_or_else(|| ClientError::MalformedTimestamp(trimmed.to_string()))
}

fn parse_extended(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(timestamp, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `20200601T000000Z` → `2020-06-01T00:00:00Z`. `None` when the value does
/// not start with a basic-format date and time.
fn expand_basic_format(timestamp: &str) -> Option<String> {
    let bytes = timestamp.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes.get(range).is_some_and(|b| b.iter().all(u8::is_ascii_digit));

    if bytes.get(8) != Some(&b'T') || !digits(0..8) || !digits(9..15) {
        return None;
    }

    Some(format!(
        "{}-{}-{}T{}:{}:{}{}",
        &timestamp[0..4], &timestamp[4..6], &timestamp[6..8],
        &timestamp[9..11], &timestamp[11..13], &timestamp[13..15],
        &timestamp[15..],
    ))
}

/// Render a timestamp for a table cell in the given timezone.
///
/// Absent stays absent; values that do not parse (the `---` placeholder
/// among them) are shown as they are.
pub(crate) fn format_timestamp_for_cli<Tz>(timestamp: Option<&str>, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let timestamp = timestamp?;

    match parse_timestamp(timestamp) {
        Ok(parsed) => Some(parsed.with_timezone(tz).format(CLI_TIMESTAMP_FORMAT).to_string()),
        Err(_) => {
            debug!("keeping unparseable timestamp {:?} as is", timestamp);
            Some(timestamp.to_string())
        }
    }
}
