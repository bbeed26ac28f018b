//! The `ClockTime` value: an hour and minute on a 24-hour clock.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidReason, TimeWordError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time, hour `0..=23` and minute `0..=59`.
///
/// Parsed from and displayed as zero-padded `HH:MM`. Serializes as that
/// same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Builds a time from numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWordError::InvalidInput`] when the hour is above 23 or the
    /// minute is above 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeWordError> {
        Self::checked(&format!("{hour:02}:{minute:02}"), hour, minute)
    }

    /// Time at `minute_of_day` minutes past midnight, if that is within one day.
    #[must_use]
    pub fn from_minute_of_day(minute_of_day: u16) -> Option<Self> {
        if minute_of_day >= MINUTES_PER_DAY {
            return None;
        }
        let hour = u8::try_from(minute_of_day / 60).ok()?;
        let minute = u8::try_from(minute_of_day % 60).ok()?;
        Some(Self { hour, minute })
    }

    /// Hour of the day, `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    fn checked(input: &str, hour: u32, minute: u32) -> Result<Self, TimeWordError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| TimeWordError::invalid(input, InvalidReason::Hour(hour)))?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m < 60)
            .ok_or_else(|| TimeWordError::invalid(input, InvalidReason::Minute(minute)))?;
        Ok(Self { hour, minute })
    }
}

/// Reads exactly two ASCII digits.
fn two_digits(field: &str) -> Option<u32> {
    match field.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

impl FromStr for ClockTime {
    type Err = TimeWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shape = || TimeWordError::invalid(s, InvalidReason::Shape);
        let (hour, minute) = s.split_once(':').ok_or_else(shape)?;
        let hour = two_digits(hour).ok_or_else(shape)?;
        let minute = two_digits(minute).ok_or_else(shape)?;
        Self::checked(s, hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for ClockTime {
    // chrono keeps hour < 24 and minute < 60.
    #[allow(clippy::cast_possible_truncation)]
    fn from(time: NaiveTime) -> Self {
        Self { hour: time.hour() as u8, minute: time.minute() as u8 }
    }
}
