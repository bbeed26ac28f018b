//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::LiveClock;
use crate::adapters::recording::RecordingClock;
use crate::adapters::replaying::ReplayingClock;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::ports::Clock;

/// Ports available to command handlers.
pub struct ServiceContext {
    /// Clock for reading the current time.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Context backed by the real system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock) }
    }

    /// Live context whose clock reads are captured into `session`.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        Self {
            clock: Box::new(RecordingClock::new(
                Box::new(LiveClock),
                std::sync::Arc::clone(&session.clock),
            )),
        }
    }

    /// Context whose clock serves the interactions stored in a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self { clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))) })
    }

    /// Picks live, recording or replaying adapters from `settings`.
    ///
    /// The recording session, if any, must be finished once the context is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the replay cassette cannot be loaded or the
    /// recording directory cannot be created.
    pub fn from_settings(
        settings: &Settings,
    ) -> Result<(Self, Option<RecordingSession>), String> {
        if let Some(path) = &settings.replay_cassette {
            tracing::debug!(cassette = %path.display(), "replaying clock");
            return Ok((Self::replaying(path)?, None));
        }
        if let Some(dir) = &settings.record_dir {
            let session = RecordingSession::new(dir)?;
            return Ok((Self::recording(&session), Some(session)));
        }
        Ok((Self::live(), None))
    }
}
