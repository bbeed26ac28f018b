//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::Clock;

/// Serves recorded `clock::now` values in order.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> Result<DateTime<Utc>, String> {
        let output = {
            let mut replayer =
                self.replayer.lock().map_err(|e| format!("Replayer lock poisoned: {e}"))?;
            replayer.next_interaction("clock", "now")?.output.clone()
        };
        serde_json::from_value(output)
            .map_err(|e| format!("clock::now: recorded value is not a timestamp: {e}"))
    }
}
