use thiserror::Error;

use crate::ledger::LedgerError;

/// Configuration could not be read.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors surfaced by the system coordinator.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Ledger task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
    #[error("Event export failed: {0}")]
    Export(#[from] serde_json::Error),
}
