//! Recording adapters: delegate to a live port and capture every call.

pub mod clock;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;

/// Serializes one port call into the shared recorder.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) -> Result<(), String>
where
    I: Serialize,
    O: Serialize,
{
    let input = serde_json::to_value(input)
        .map_err(|e| format!("Failed to serialize {port}::{method} input: {e}"))?;
    let output = serde_json::to_value(output)
        .map_err(|e| format!("Failed to serialize {port}::{method} output: {e}"))?;

    let mut guard = recorder.lock().map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
    guard.record(port, method, input, output);
    Ok(())
}
