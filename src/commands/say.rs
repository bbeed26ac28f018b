//! `timeword say` command.

use std::io::{self, BufRead, Write};

use super::{write_line, Reading};
use crate::clock_time::ClockTime;

/// Execute the `say` command.
///
/// Speaks each of `times`, or each non-blank stdin line when `times` is empty.
///
/// # Errors
///
/// Returns an error string on the first invalid time, or after all input when
/// `keep_going` is set and any time was invalid.
pub fn run(times: &[String], json: bool, keep_going: bool) -> Result<(), String> {
    let inputs = if times.is_empty() { read_stdin()? } else { times.to_vec() };
    let stdout = io::stdout();
    speak_all(&inputs, json, keep_going, &mut stdout.lock())
}

fn read_stdin() -> Result<Vec<String>, String> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("Failed to read stdin: {e}"))?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

fn speak_all<W: Write>(
    inputs: &[String],
    json: bool,
    keep_going: bool,
    out: &mut W,
) -> Result<(), String> {
    let mut failures = 0usize;
    for input in inputs {
        let time = match input.parse::<ClockTime>() {
            Ok(time) => time,
            Err(err) if keep_going => {
                eprintln!("{err}");
                failures += 1;
                continue;
            }
            Err(err) => return Err(err.to_string()),
        };
        let reading = Reading::of(time);
        tracing::debug!(%time, words = %reading.words, "spoke time");
        let line = if json { reading.to_json()? } else { reading.words };
        write_line(out, &line)?;
    }

    if failures > 0 {
        return Err(format!("{failures} of {} time(s) could not be read", inputs.len()));
    }
    Ok(())
}
