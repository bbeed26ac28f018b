//! Spoken-word rendering of clock times.
//!
//! `"06:01"` reads as `"six oh one am"`, `"00:00"` as `"midnight"` and
//! `"12:00"` as `"noon"`. Rendering is pure: no locale, environment or
//! current-time lookups.

use std::borrow::Cow;
use std::fmt;

use crate::clock_time::ClockTime;
use crate::error::TimeWordError;

/// Hour words indexed by `hour % 12`.
const HOUR_WORDS: [&str; 12] = [
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

/// Minute words for `0..20`, index 0 being the "oh" of "six oh one".
const MINUTE_WORDS: [&str; 20] = [
    "oh", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Tens words for 20, 30, 40 and 50.
const TENS_WORDS: [&str; 4] = ["twenty", "thirty", "forty", "fifty"];

/// Which half of the day a time falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Hours `0..12`.
    Am,
    /// Hours `12..24`.
    Pm,
}

impl Period {
    /// Period of a 24-hour `hour`.
    #[must_use]
    pub const fn of(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "am",
            Self::Pm => "pm",
        })
    }
}

/// Speaks a `HH:MM` string.
///
/// # Errors
///
/// Returns [`TimeWordError::InvalidInput`] when `time` is not a zero-padded
/// 24-hour `HH:MM` value.
pub fn format(time: &str) -> Result<String, TimeWordError> {
    Ok(to_words(time.parse()?))
}

/// Speaks an already validated time.
#[must_use]
pub fn to_words(time: ClockTime) -> String {
    match (time.hour(), time.minute()) {
        (0, 0) => "midnight".to_owned(),
        (12, 0) => "noon".to_owned(),
        (hour, minute) => {
            format!("{} {} {}", hour_word(hour), minute_phrase(minute), Period::of(hour))
        }
    }
}

fn hour_word(hour: u8) -> &'static str {
    HOUR_WORDS[usize::from(hour % 12)]
}

fn minute_phrase(minute: u8) -> Cow<'static, str> {
    match minute {
        0 => Cow::Borrowed("o'clock"),
        1..=9 => Cow::Owned(format!("oh {}", MINUTE_WORDS[usize::from(minute)])),
        10..=19 => Cow::Borrowed(MINUTE_WORDS[usize::from(minute)]),
        _ => {
            let tens = TENS_WORDS[usize::from(minute / 10 - 2)];
            match minute % 10 {
                0 => Cow::Borrowed(tens),
                ones => Cow::Owned(format!("{tens} {}", MINUTE_WORDS[usize::from(ones)])),
            }
        }
    }
}
