//! Adapter configuration.
//!
//! One knob today: whether the adapter may use desktop-global mouse queries.
//! `Auto` defers to the video-driver capability probe; `Never` forces
//! window-local queries, for sessions where global state is known to lie
//! (nested compositors, remote displays).

use serde::{Deserialize, Serialize};

/// Policy for desktop-global mouse state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalMousePolicy {
    /// Use global queries when the video driver is known to support them.
    #[default]
    Auto,
    /// Always query window-local state.
    Never,
}

/// Input adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub global_mouse: GlobalMousePolicy,
}

impl AdapterConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying TOML error for malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_auto() {
        assert_eq!(AdapterConfig::default().global_mouse, GlobalMousePolicy::Auto);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = AdapterConfig::from_toml_str("").unwrap();
        assert_eq!(config, AdapterConfig::default());
    }

    #[test]
    fn test_never_policy_parses() {
        let config = AdapterConfig::from_toml_str("global_mouse = \"never\"").unwrap();
        assert_eq!(config.global_mouse, GlobalMousePolicy::Never);
    }

    #[test]
    fn test_malformed_policy_is_rejected() {
        assert!(AdapterConfig::from_toml_str("global_mouse = \"sometimes\"").is_err());
    }
}
