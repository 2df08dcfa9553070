//! Daily broadcast time.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fires once a day at `hour:minute` UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    hour: u32,
    minute: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid daily schedule {input:?}: expected \"MM HH * * *\" or \"HH:MM\"")]
pub struct ScheduleParseError {
    pub input: String,
}

impl DailySchedule {
    /// # Panics
    /// If `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Self {
        assert!(hour < 24 && minute < 60, "invalid time {hour}:{minute}");
        Self { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Next firing instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now
            .date_naive()
            .and_hms_opt(self.hour, self.minute, 0)
            .map(|t| t.and_utc())
            .unwrap_or(now);
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

impl FromStr for DailySchedule {
    type Err = ScheduleParseError;

    /// Accepts a cron expression that fires daily (`minute hour * * *`) or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ScheduleParseError {
            input: s.to_string(),
        };
        let fields: Vec<&str> = s.split_whitespace().collect();
        let (hour, minute) = match fields.as_slice() {
            [minute, hour, "*", "*", "*"] => (*hour, *minute),
            [clock] => clock.split_once(':').ok_or_else(err)?,
            _ => return Err(err()),
        };
        let hour = parse_field(hour, 23).ok_or_else(err)?;
        let minute = parse_field(minute, 59).ok_or_else(err)?;
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} UTC", self.hour, self.minute)
    }
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|&n| n <= max)
}
