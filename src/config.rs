//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first, so
//! `TIMEWORD_REPLAY=fixtures/morning.cassette.yaml` can live there instead of
//! the shell.

use std::path::PathBuf;

/// Environment variable holding the tracing filter directive.
pub const LOG_VAR: &str = "TIMEWORD_LOG";
/// Environment variable naming a directory to record clock cassettes under.
pub const RECORD_VAR: &str = "TIMEWORD_RECORD";
/// Environment variable naming a cassette file to replay clock reads from.
pub const REPLAY_VAR: &str = "TIMEWORD_REPLAY";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter directive, e.g. `warn` or `timeword=debug`.
    pub log_filter: String,
    /// Record clock reads into a new session under this directory.
    pub record_dir: Option<PathBuf>,
    /// Replay clock reads from this cassette.
    pub replay_cassette: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_string(), record_dir: None, replay_cassette: None }
    }
}

impl Settings {
    /// Loads `.env` (if present) and reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string when recording and replaying are both requested.
    pub fn load() -> Result<Self, String> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error string when recording and replaying are both requested.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let settings = Self {
            log_filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            record_dir: get(RECORD_VAR).map(PathBuf::from),
            replay_cassette: get(REPLAY_VAR).map(PathBuf::from),
        };

        if settings.record_dir.is_some() && settings.replay_cassette.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot be set at the same time"));
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(settings_from(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn reads_every_variable() {
        let settings =
            settings_from(&[(LOG_VAR, "timeword=debug"), (REPLAY_VAR, "morning.cassette.yaml")])
                .unwrap();
        assert_eq!(settings.log_filter, "timeword=debug");
        assert_eq!(settings.replay_cassette, Some(PathBuf::from("morning.cassette.yaml")));
        assert_eq!(settings.record_dir, None);
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = settings_from(&[(LOG_VAR, "  "), (RECORD_VAR, "")]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn record_and_replay_conflict() {
        let err = settings_from(&[(RECORD_VAR, "cassettes"), (REPLAY_VAR, "a.yaml")]).unwrap_err();
        assert!(err.contains("cannot be set at the same time"));
    }
}
