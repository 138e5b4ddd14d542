//! Step creation timestamps and their local display form.
//!
//! Chat clients send `createdAt` either as epoch milliseconds or as a date
//! string. Display never fails: anything that cannot be placed on the
//! viewer's clock renders as an empty string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Write as _};
use thiserror::Error;
use tracing::debug;

/// Default display pattern: two-digit hour and minute on a 24-hour clock.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

const NAIVE_DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// When a step was created, as received from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// A date string, usually RFC 3339.
    Text(String),
}

impl CreatedAt {
    /// Returns `true` for values that mean "no timestamp": zero and the empty string.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::EpochMillis(millis) => *millis == 0,
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Places the timestamp on the clock of `tz`.
    ///
    /// Strings without an offset are read as wall-clock time in `tz`.
    /// Date-only strings are read as midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError`] when the value is out of range, cannot be
    /// parsed, or names a local time that does not exist in `tz`.
    pub fn in_time_zone<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
        match self {
            Self::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|instant| instant.with_timezone(tz))
                .ok_or(TimestampError::OutOfRange(*millis)),
            Self::Text(text) => parse_text(text, tz),
        }
    }
}

impl From<i64> for CreatedAt {
    fn from(millis: i64) -> Self {
        Self::EpochMillis(millis)
    }
}

impl From<&str> for CreatedAt {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CreatedAt {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: TimeZone> From<DateTime<T>> for CreatedAt {
    fn from(instant: DateTime<T>) -> Self {
        Self::EpochMillis(instant.timestamp_millis())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCreatedAt {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for CreatedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawCreatedAt::deserialize(deserializer)? {
            RawCreatedAt::Integer(millis) => Self::EpochMillis(millis),
            RawCreatedAt::Float(millis) => Self::EpochMillis(truncate_millis(millis)),
            RawCreatedAt::Text(text) => Self::Text(text),
        })
    }
}

/// Drops fractional milliseconds. A non-zero value below one millisecond
/// becomes `1` so that it stays distinct from the unset `0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "fractional milliseconds are dropped and out-of-range values saturate"
)]
fn truncate_millis(millis: f64) -> i64 {
    let truncated = millis as i64;
    if truncated == 0 && millis != 0.0 && !millis.is_nan() {
        1
    } else {
        truncated
    }
}

/// Reasons a timestamp cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The epoch value lies outside the representable range.
    #[error("epoch milliseconds {0} are out of range")]
    OutOfRange(i64),

    /// The string is not a recognised date format.
    #[error("unparseable timestamp '{0}'")]
    Unparseable(String),

    /// The wall-clock time falls into a gap of the viewer's time zone.
    #[error("local time {0} does not exist in the viewer's time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
    let trimmed = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(tz));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(instant.with_timezone(tz));
    }
    if let Some(naive) = NAIVE_DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
    {
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or(TimestampError::NonexistentLocalTime(naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight: DateTime<Utc> = date.and_time(NaiveTime::MIN).and_utc();
        return Ok(midnight.with_timezone(tz));
    }

    Err(TimestampError::Unparseable(text.to_owned()))
}

/// Formats a creation timestamp on the viewer's clock.
///
/// Returns an empty string when the value is absent, unset, unparseable, or
/// when `pattern` is not a valid `chrono` format string.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::{format_time, CreatedAt, DEFAULT_TIME_FORMAT};
/// use chrono::Utc;
///
/// let created = CreatedAt::from("2024-03-05T08:07:00Z");
/// assert_eq!(format_time(Some(&created), &Utc, DEFAULT_TIME_FORMAT), "08:07");
/// assert_eq!(format_time(Some(&CreatedAt::EpochMillis(0)), &Utc, DEFAULT_TIME_FORMAT), "");
/// assert_eq!(format_time(None, &Utc, DEFAULT_TIME_FORMAT), "");
/// ```
#[must_use]
pub fn format_time<Tz>(created_at: Option<&CreatedAt>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(value) = created_at.filter(|value| !value.is_unset()) else {
        return String::new();
    };

    match value.in_time_zone(tz) {
        Ok(local) => {
            let mut formatted = String::new();
            if write!(formatted, "{}", local.format(pattern)).is_err() {
                debug!(pattern, "invalid time format pattern; timestamp omitted");
                return String::new();
            }
            formatted
        }
        Err(error) => {
            debug!(%error, "timestamp degraded to empty display");
            String::new()
        }
    }
}
