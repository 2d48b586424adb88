//! # Demo Configuration
//!
//! Settings for the demo driver, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LEDGER_*`)
//! 2. Defaults (this file)
//!
//! `RUST_LOG`, when set, still overrides `LEDGER_LOG` (see `init_tracing`).

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ConfigError;

/// Demo driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Print the final bank state as JSON after the scenario.
    pub print_snapshot: bool,
}

impl Default for DemoConfig {
    /// Quiet logging, no snapshot: stdout shows only the scenario lines.
    fn default() -> Self {
        DemoConfig {
            log_filter: "warn".to_string(),
            print_snapshot: false,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `LEDGER_LOG`: tracing filter, e.g. `ledger_core=debug`
    /// - `LEDGER_SNAPSHOT`: `true`/`false`/`1`/`0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();

        if let Some(filter) = lookup("LEDGER_LOG") {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("LEDGER_SNAPSHOT") {
            config.print_snapshot = parse_flag("LEDGER_SNAPSHOT", &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert!(!config.print_snapshot);
    }

    #[test]
    fn test_env_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("LEDGER_LOG", "ledger_core=debug"),
            ("LEDGER_SNAPSHOT", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "ledger_core=debug");
        assert!(config.print_snapshot);
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = DemoConfig::from_lookup(lookup_from(&[("LEDGER_SNAPSHOT", "sometimes")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for LEDGER_SNAPSHOT: 'sometimes'"
        );
    }
}
