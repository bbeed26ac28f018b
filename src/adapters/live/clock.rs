//! System clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Reads the operating system clock.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> Result<DateTime<Utc>, String> {
        Ok(Utc::now())
    }
}
