//! Command dispatch and handlers.

pub mod now;
pub mod say;
pub mod table;

use std::io::Write;

use serde::Serialize;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::clock_time::ClockTime;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::words::to_words;

/// One spoken time, as printed by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// The time that was read.
    pub time: ClockTime,
    /// Its spoken form.
    pub words: String,
}

impl Reading {
    /// Speaks `time`.
    #[must_use]
    pub fn of(time: ClockTime) -> Self {
        Self { time, words: to_words(time) }
    }

    /// Single-line JSON form, e.g. `{"time":"06:01","words":"six oh one am"}`.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode reading: {e}"))
    }
}

/// Dispatch a parsed command to its handler.
///
/// Only `now` reads the clock, so only `now` builds a service context from
/// the record/replay settings.
///
/// # Errors
///
/// Returns an error string if the handler fails, or, for `now`, if the
/// context cannot be built or the recording cannot be saved.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    match command {
        Command::Say { times, json, keep_going } => say::run(times, *json, *keep_going),
        Command::Now { utc, json } => with_context(settings, |ctx| now::run(ctx, *utc, *json)),
        Command::Table { step, json } => table::run(*step, *json),
    }
}

/// Runs `handler` with a context built from `settings`.
///
/// When recording is configured, the clock cassette is written after the
/// handler returns, even if it failed.
fn with_context<F>(settings: &Settings, handler: F) -> Result<(), String>
where
    F: FnOnce(&ServiceContext) -> Result<(), String>,
{
    let (ctx, session) = ServiceContext::from_settings(settings)?;

    let result = handler(&ctx);

    if let Some(session) = session {
        // Release the recorder handles held by the adapters.
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| format!("Failed to write output: {e}"))
}
