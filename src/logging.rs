//! Diagnostics on stderr through `tracing`.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

const DEFAULT_LEVEL: &str = "warn";

/// Installs the global subscriber, filtered by `directive`.
///
/// Output goes to stderr; stdout carries only readings. A directive that
/// does not parse falls back to `warn` and is reported as a warning. A
/// subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error string if no subscriber is installed and installing one
/// fails.
pub fn init(directive: &str) -> Result<(), String> {
    let (filter, rejected) = filter_for(directive);

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .or_else(|e| {
            if tracing::dispatcher::has_been_set() {
                Ok(())
            } else {
                Err(format!("Failed to install log subscriber: {e}"))
            }
        })?;

    if let Some(reason) = rejected {
        tracing::warn!(%directive, %reason, "ignoring invalid log filter, using {DEFAULT_LEVEL}");
    }
    Ok(())
}

/// Parses `directive`, or the default level with the parse error.
fn filter_for(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LEVEL), Some(err.to_string())),
    }
}
