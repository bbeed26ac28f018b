//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Clock;

/// Delegates to an inner clock and records each instant it returns.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> Result<DateTime<Utc>, String> {
        let instant = self.inner.now()?;
        record_interaction(&self.recorder, "clock", "now", &(), &instant)?;
        Ok(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveClock;

    #[test]
    fn records_now_interaction() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("unused.yaml", "test")));

        let clock = RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder));
        let first = clock.now().unwrap();
        let second = clock.now().unwrap();
        assert!(first <= second);

        let guard = recorder.lock().unwrap();
        assert_eq!(guard.len(), 2);
    }
}
