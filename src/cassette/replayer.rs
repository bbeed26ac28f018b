//! Serves recorded interactions back in order.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays a cassette, one independent queue per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Indexes the interactions of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        Self { queues, cursors: HashMap::new() }
    }

    /// Returns the next unconsumed interaction for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the available streams when nothing was
    /// recorded for the pair, or when every recorded call was already served.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available: [{}]",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let interaction = queue.get(*cursor).ok_or_else(|| {
            format!(
                "Cassette exhausted: all {} interactions for {port}::{method} have been consumed",
                queue.len()
            )
        })?;
        *cursor += 1;
        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn now_call(seq: u64, output: &str) -> Interaction {
        Interaction {
            seq,
            port: "clock".into(),
            method: "now".into(),
            input: json!(null),
            output: json!(output),
        }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.0.0".into(),
            interactions,
        }
    }

    #[test]
    fn serves_interactions_in_order() {
        let cassette = make_cassette(vec![
            now_call(0, "2025-01-01T00:00:00Z"),
            now_call(1, "2025-01-01T00:01:00Z"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("clock", "now").unwrap().seq, 0);
        assert_eq!(replayer.next_interaction("clock", "now").unwrap().seq, 1);
    }

    #[test]
    fn exhausted_stream_is_an_error() {
        let cassette = make_cassette(vec![now_call(0, "2025-01-01T00:00:00Z")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        replayer.next_interaction("clock", "now").unwrap();
        let err = replayer.next_interaction("clock", "now").unwrap_err();
        assert!(err.contains("have been consumed"), "{err}");
    }

    #[test]
    fn unknown_port_lists_available_streams() {
        let cassette = make_cassette(vec![now_call(0, "2025-01-01T00:00:00Z")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let err = replayer.next_interaction("weather", "today").unwrap_err();
        assert!(err.contains("no interactions recorded"), "{err}");
        assert!(err.contains("clock::now"), "{err}");
    }
}
