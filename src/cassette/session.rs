//! A recording session: one cassette per port in a fresh directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::recorder::CassetteRecorder;

/// Owns the recorders of one recording run.
///
/// Cassettes land in `<base>/<timestamp>-<short id>/<port>.cassette.yaml`.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates the session directory under `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(base: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let short_id = Uuid::new_v4().simple().to_string();
        let session_name = format!("{timestamp}-{}", &short_id[..8]);
        let output_dir = base.join(&session_name);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let clock = CassetteRecorder::new(
            output_dir.join("clock.cassette.yaml"),
            format!("{session_name}-clock"),
        );
        tracing::debug!(dir = %output_dir.display(), "recording session started");

        Ok(Self { clock: Arc::new(Mutex::new(clock)), output_dir })
    }

    /// Writes every cassette and returns the session directory.
    ///
    /// Adapters sharing a recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish()?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        Ok(self.output_dir)
    }
}
