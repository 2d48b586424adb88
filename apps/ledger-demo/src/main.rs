//! # Ledger Demo Entry Point
//!
//! Runs the Alice & Bob scenario and prints each step to stdout.
//!
//! ```bash
//! cargo run -p ledger-demo
//! LEDGER_LOG=ledger_core=debug cargo run -p ledger-demo
//! LEDGER_SNAPSHOT=1 cargo run -p ledger-demo
//! ```

use ledger_demo::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    ledger_demo::init_tracing(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ledger_demo::run(&config, &mut out)?;

    Ok(())
}
