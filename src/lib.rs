//! Speak 24-hour clock times as English words.
//!
//! ```
//! assert_eq!(timeword::format("06:01").unwrap(), "six oh one am");
//! assert_eq!(timeword::format("12:00").unwrap(), "noon");
//! assert!(timeword::format("25:00").is_err());
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod clock_time;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod words;

pub use clock_time::ClockTime;
pub use error::{InvalidReason, TimeWordError};
pub use words::{format, to_words, Period};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| format!("Failed to print help: {e}"));
        }
        Err(err) => return Err(err.to_string()),
    };
    let settings = config::Settings::load()?;
    logging::init(&settings.log_filter)?;
    commands::dispatch(&cli.command, &settings)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_says_a_time() {
        assert!(run(["timeword", "say", "06:01"]).is_ok());
    }

    #[test]
    fn run_errors_on_invalid_time() {
        let err = run(["timeword", "say", "25:00"]).unwrap_err();
        assert!(err.contains("hour 25"), "{err}");
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        assert!(run(["timeword", "unknown"]).is_err());
    }

    #[test]
    fn run_accepts_help() {
        assert!(run(["timeword", "--help"]).is_ok());
    }
}
