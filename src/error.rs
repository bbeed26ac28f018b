//! Error type for clock-time parsing and formatting.

use thiserror::Error;

/// Why a clock time was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidReason {
    /// The text is not two digits, a colon, and two digits.
    #[error("expected HH:MM with two-digit fields")]
    Shape,
    /// The hour field is outside `00..=23`.
    #[error("hour {0} is outside 00..=23")]
    Hour(u32),
    /// The minute field is outside `00..=59`.
    #[error("minute {0} is outside 00..=59")]
    Minute(u32),
}

/// The single failure kind of the formatter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeWordError {
    /// The input could not be read as a 24-hour `HH:MM` time.
    #[error("invalid clock time {input:?}: {reason}")]
    InvalidInput {
        /// The text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: InvalidReason,
    },
}

impl TimeWordError {
    pub(crate) fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidInput { input: input.into(), reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_input_and_reason() {
        let err = TimeWordError::invalid("25:00", InvalidReason::Hour(25));
        assert_eq!(err.to_string(), "invalid clock time \"25:00\": hour 25 is outside 00..=23");
    }

    #[test]
    fn shape_message() {
        let err = TimeWordError::invalid("abc", InvalidReason::Shape);
        assert!(err.to_string().contains("expected HH:MM"));
    }
}
