//! Wire format for points in time.
//!
//! Timestamps go out as RFC 3339 UTC with millisecond precision and a `Z` suffix,
//! e.g. `2025-01-01T00:00:00.000Z`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Naive date-time layouts accepted for deadlines, read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn format(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for `DateTime<Utc>` fields.
pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(at))
}

/// A technology deadline.
///
/// Deadlines are taken as given: text that does not parse as a date is kept as
/// [`Deadline::Invalid`] and serialised as `null` rather than rejected. Callers that
/// want to refuse such input check [`Deadline::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    At(DateTime<Utc>),
    Invalid,
}

impl Deadline {
    /// Parses a deadline from client input.
    ///
    /// Tries RFC 3339, then a naive date-time (UTC), then a bare `YYYY-MM-DD` date
    /// (midnight UTC).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Self::At(at.with_timezone(&Utc));
        }

        for layout in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
                return Self::At(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map_or(Self::Invalid, |naive| Self::At(naive.and_utc()))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl From<DateTime<Utc>> for Deadline {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::At(at) => serialize(at, serializer),
            Self::Invalid => serializer.serialize_none(),
        }
    }
}
