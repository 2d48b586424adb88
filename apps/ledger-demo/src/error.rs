//! # Demo Error Types
//!
//! ```text
//! LedgerError (ledger-core) ──┐
//! std::io::Error ─────────────┼──► DemoError ──► anyhow (main)
//! serde_json::Error ──────────┘
//!
//! ConfigError ───────────────────────► anyhow (main)
//! ```

use ledger_core::LedgerError;
use thiserror::Error;

/// Errors that end the demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A ledger rejection the scenario does not expect to recover from.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Writing scenario output failed.
    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the bank snapshot failed.
    #[error("Snapshot failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Convenience type alias for Results with DemoError.
pub type DemoResult<T> = Result<T, DemoError>;
