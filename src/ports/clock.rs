//! Clock port for reading the current time.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// `timeword now` reads time only through this trait so recorded cassettes
/// can stand in for the system clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC instant.
    ///
    /// # Errors
    ///
    /// Returns an error string when the underlying source cannot produce a
    /// time, such as an exhausted cassette.
    fn now(&self) -> Result<DateTime<Utc>, String>;
}
