//! Date and time-window parsing shared by slots and projects.
//!
//! Clients send dates as `YYYY-MM-DD` and times as `HH:MM` or `HH:MM:SS`.
//! Full RFC 3339 timestamps are also accepted for both; the UTC date or
//! time-of-day part is used.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{required, CoreError};

/// Parse a calendar date.
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, CoreError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| CoreError::Validation(format!("Invalid date for {field}: '{value}'")))
}

/// Parse a time of day.
pub fn parse_time(value: &str, field: &str) -> Result<NaiveTime, CoreError> {
    for format in ["%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Ok(time);
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).time())
        .map_err(|_| CoreError::Validation(format!("Invalid time for {field}: '{value}'")))
}

/// A validated time window on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeWindow {
    /// Build a window from already-parsed parts; `end_time` must be after
    /// `start_time`.
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Result<Self, CoreError> {
        if end_time <= start_time {
            return Err(CoreError::Validation(
                "End time must be later than start time".into(),
            ));
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    /// Parse a window from raw optional inputs. Field names are only used in
    /// error messages.
    pub fn parse(
        date: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
        names: [&str; 3],
    ) -> Result<Self, CoreError> {
        let [date_field, start_field, end_field] = names;
        let date = required(date, date_field)?;
        let start = required(start, start_field)?;
        let end = required(end, end_field)?;

        Self::new(
            parse_date(date, date_field)?,
            parse_time(start, start_field)?,
            parse_time(end, end_field)?,
        )
    }
}
