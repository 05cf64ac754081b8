//! Sample records and usable/inert classification.
//!
//! Upstream feeds hand the tool loosely-shaped JSON records in which either
//! field may be absent. [`Sample`] models that shape directly;
//! [`Sample::classify`] is the single place that decides whether a record
//! can contribute to a chart, so the aggregation loop never touches an
//! unchecked field.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Raw reading as delivered by an upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// ISO-8601 timestamp; a trailing literal `Z` is accepted as UTC.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Numeric reading at that instant.
    #[serde(default)]
    pub value: Option<f64>,
}

/// A sample that passed validation: a clock position plus its reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteReading {
    /// Minutes since midnight, always in `[0, 1440)`.
    pub minute_of_day: u32,
    /// The numeric reading.
    pub value: f64,
}

impl Sample {
    /// Create a sample with both fields present.
    #[must_use]
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            value: Some(value),
        }
    }

    /// Classify this record as usable or inert.
    ///
    /// Only the clock time matters: the calendar date and the seconds field
    /// are discarded, so readings from different days taken at the same time
    /// of day land in the same chart position.
    ///
    /// # Errors
    ///
    /// Returns a [`SampleError`] naming the missing or malformed field.
    pub fn classify(&self) -> Result<MinuteReading, SampleError> {
        let raw = self
            .timestamp
            .as_deref()
            .ok_or(SampleError::MissingTimestamp)?;
        let value = self.value.ok_or(SampleError::MissingValue)?;
        let minute_of_day = minute_of_day(raw)?;
        Ok(MinuteReading {
            minute_of_day,
            value,
        })
    }
}

/// Parse an ISO-8601 timestamp down to its minute-of-day.
///
/// A trailing literal `Z` is rewritten to `+00:00` first; timestamps without
/// any offset are accepted as naive clock times.
fn minute_of_day(raw: &str) -> Result<u32, SampleError> {
    let normalized: Cow<'_, str> = match raw.strip_suffix('Z') {
        Some(stripped) => Cow::Owned(format!("{stripped}+00:00")),
        None => Cow::Borrowed(raw),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.hour() * 60 + dt.minute());
    }
    normalized
        .parse::<NaiveDateTime>()
        .map(|dt| dt.hour() * 60 + dt.minute())
        .map_err(|_| SampleError::BadTimestamp(raw.to_string()))
}
