//! Process configuration
//!
//! Read once at startup from the environment (or JSON) and handed to the
//! engine. Nothing here is consulted at tick time.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Environment variable holding a fixed RNG seed
pub const ENV_SEED: &str = "GAME_RAND_SEED";
/// Environment variable holding the player identifier
pub const ENV_PLAYER_ID: &str = "GAME_PLAYER_ID";
/// Set to "1" to enable telemetry
pub const ENV_LOGGING: &str = "GAME_LOGGING";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for reproducible runs; clock-seeded when absent
    pub seed: Option<u64>,
    /// Player identifier attached to telemetry; generated when absent
    pub player_id: Option<String>,
    /// Send telemetry records
    pub logging: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            player_id: None,
            logging: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(err) => log::warn!("Ignoring {ENV_SEED}={raw:?}: {err}"),
            }
        }

        if let Some(player_id) = lookup(ENV_PLAYER_ID).filter(|id| !id.is_empty()) {
            self.player_id = Some(player_id);
        }

        if let Some(flag) = lookup(ENV_LOGGING) {
            self.logging = flag == "1";
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Configured player id, or a fresh random one
    pub fn resolve_player_id(&self) -> String {
        self.player_id.clone().unwrap_or_else(random_id)
    }
}

/// Random 128-bit identifier as hex, used for player and play ids
pub fn random_id() -> String {
    let bits: u128 = rand::rng().random();
    format!("{bits:032x}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        settings.apply_env(lookup(&[
            (ENV_SEED, "1234"),
            (ENV_PLAYER_ID, "eel-fan"),
            (ENV_LOGGING, "1"),
        ]));
        assert_eq!(settings.seed, Some(1234));
        assert_eq!(settings.player_id.as_deref(), Some("eel-fan"));
        assert!(settings.logging);
        assert_eq!(settings.resolve_player_id(), "eel-fan");
    }

    #[test]
    fn test_bad_seed_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(lookup(&[(ENV_SEED, "not-a-number"), (ENV_LOGGING, "yes")]));
        assert_eq!(settings.seed, None);
        assert!(!settings.logging);
    }

    #[test]
    fn test_generated_player_id() {
        let id = Settings::default().resolve_player_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let settings = Settings::from_json(r#"{"seed": 5, "muted": true}"#).unwrap();
        assert_eq!(settings.seed, Some(5));
        assert!(settings.muted);
        assert_eq!(settings.sfx_volume, 1.0);

        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }
}
