//! # Ledger Demo Library
//!
//! Wires configuration, logging and the scenario together.
//!
//! ## Module Organization
//! ```text
//! ledger_demo/
//! ├── lib.rs       ◄─── You are here (startup & run)
//! ├── config.rs    ◄─── DemoConfig from LEDGER_* variables
//! ├── scenario.rs  ◄─── Alice & Bob walkthrough
//! └── error.rs     ◄─── DemoError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! 1. Load `DemoConfig` from the environment
//! 2. Initialize tracing (stderr)
//! 3. Run the scenario against stdout
//! 4. Optionally print the bank snapshot as JSON

pub mod config;
pub mod error;
pub mod scenario;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;
use error::DemoResult;

/// Runs the demo with the given configuration, writing to `out`.
///
/// Logging must already be initialized; see [`init_tracing`].
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    info!(?config, "starting ledger demo");

    let bank = scenario::run_scenario(out)?;

    if config.print_snapshot {
        let snapshot = serde_json::to_string_pretty(&bank)?;
        writeln!(out, "{snapshot}")?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every balance change
/// - `LEDGER_LOG=ledger_core=debug` - Same, via the demo's own variable
/// - Default: WARN (negative opening balances only)
///
/// Events go to stderr so stdout carries only the scenario output.
pub fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
