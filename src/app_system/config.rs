use std::env;
use std::str::FromStr;

use super::error::ConfigError;
use crate::ledger::DEFAULT_MARKETPLACE_NAME;

pub const ENV_MARKETPLACE_NAME: &str = "MARKETPLACE_NAME";
pub const ENV_MAILBOX_CAPACITY: &str = "MARKETPLACE_MAILBOX_CAPACITY";
pub const ENV_EVENT_CAPACITY: &str = "MARKETPLACE_EVENT_CAPACITY";

/// Runtime settings for the ledger service.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// Display name reported by the marketplace.
    pub marketplace_name: String,
    /// Pending requests the service mailbox buffers before senders wait.
    pub mailbox_capacity: usize,
    /// Events retained for slow subscribers before they lag.
    pub event_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            marketplace_name: DEFAULT_MARKETPLACE_NAME.to_string(),
            mailbox_capacity: 32,
            event_capacity: 256,
        }
    }
}

impl LedgerConfig {
    /// Defaults overridden by `MARKETPLACE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_MARKETPLACE_NAME) {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_MARKETPLACE_NAME,
                    value: name,
                    reason: "must not be empty".to_string(),
                });
            }
            config.marketplace_name = name;
        }
        if let Some(raw) = lookup(ENV_MAILBOX_CAPACITY) {
            config.mailbox_capacity = parse_capacity(ENV_MAILBOX_CAPACITY, raw)?;
        }
        if let Some(raw) = lookup(ENV_EVENT_CAPACITY) {
            config.event_capacity = parse_capacity(ENV_EVENT_CAPACITY, raw)?;
        }

        Ok(config)
    }
}

// tokio panics on zero-capacity channels.
fn parse_capacity(key: &'static str, raw: String) -> Result<usize, ConfigError> {
    match usize::from_str(raw.trim()) {
        Ok(0) => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = LedgerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.marketplace_name, "Dapp University Marketplace");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = LedgerConfig::from_lookup(lookup(&[
            (ENV_MARKETPLACE_NAME, "Bazaar"),
            (ENV_MAILBOX_CAPACITY, "8"),
            (ENV_EVENT_CAPACITY, " 1024 "),
        ]))
        .unwrap();
        assert_eq!(config.marketplace_name, "Bazaar");
        assert_eq!(config.mailbox_capacity, 8);
        assert_eq!(config.event_capacity, 1024);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let zero = LedgerConfig::from_lookup(lookup(&[(ENV_MAILBOX_CAPACITY, "0")]));
        assert!(matches!(zero, Err(ConfigError::InvalidValue { key: ENV_MAILBOX_CAPACITY, .. })));

        let garbage = LedgerConfig::from_lookup(lookup(&[(ENV_EVENT_CAPACITY, "lots")]));
        assert!(matches!(garbage, Err(ConfigError::InvalidValue { key: ENV_EVENT_CAPACITY, .. })));

        let blank = LedgerConfig::from_lookup(lookup(&[(ENV_MARKETPLACE_NAME, "  ")]));
        assert!(matches!(blank, Err(ConfigError::InvalidValue { key: ENV_MARKETPLACE_NAME, .. })));
    }
}
