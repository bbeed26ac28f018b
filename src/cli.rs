//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `timeword`.
#[derive(Debug, Parser)]
#[command(name = "timeword", version, about = "Speak 24-hour clock times as English words")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Speak HH:MM times given as arguments, or one per line on stdin.
    Say {
        /// Times in 24-hour HH:MM form, e.g. 06:01 or 23:23.
        times: Vec<String>,
        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
        /// Report invalid times and continue with the rest.
        #[arg(long)]
        keep_going: bool,
    },
    /// Speak the current time.
    Now {
        /// Use UTC instead of the local time zone.
        #[arg(long)]
        utc: bool,
        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
    },
    /// Speak the times of a whole day at a fixed interval.
    Table {
        /// Minutes between rows.
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(1..=720))]
        step: u16,
        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_say_with_times() {
        let cli = Cli::parse_from(["timeword", "say", "06:01", "23:23", "--json"]);
        match cli.command {
            Command::Say { times, json, keep_going } => {
                assert_eq!(times, ["06:01", "23:23"]);
                assert!(json);
                assert!(!keep_going);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_now_flags() {
        let cli = Cli::parse_from(["timeword", "now", "--utc"]);
        assert!(matches!(cli.command, Command::Now { utc: true, json: false }));
    }

    #[test]
    fn table_step_defaults_to_an_hour() {
        let cli = Cli::parse_from(["timeword", "table"]);
        assert!(matches!(cli.command, Command::Table { step: 60, json: false }));
    }

    #[test]
    fn table_step_is_bounded() {
        assert!(Cli::try_parse_from(["timeword", "table", "--step", "0"]).is_err());
        assert!(Cli::try_parse_from(["timeword", "table", "--step", "721"]).is_err());
        assert!(Cli::try_parse_from(["timeword", "table", "--step", "720"]).is_ok());
    }
}
