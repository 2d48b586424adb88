//! # Alice & Bob Scenario
//!
//! The fixed walkthrough of the ledger API.
//!
//! ## Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Alice opens with 500.0  ──► #1, deposit 100.0  ──► print 600.0     │
//! │  2. Bob opens with 1000.0   ──► #2, deposit 500.0  ──► print 1500.0    │
//! │  3. Alice withdraws 300.0                          ──► print 300.0     │
//! │  4. Alice withdraws 500.0   ──► InsufficientFunds  ──► print message   │
//! │  5. get_account(#1)                                ──► print record    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the overdraft in step 4 is recovered from. Any other rejection ends
//! the run with an error.

use std::io::Write;

use ledger_core::{Bank, Customer, LedgerError};
use tracing::info;

use crate::error::DemoResult;

pub const ALICE_NAME: &str = "Alice";
pub const ALICE_ADDRESS: &str = "Moscow, Stremyannyi per, 1";
pub const BOB_NAME: &str = "Bob";
pub const BOB_ADDRESS: &str = "Vorkuta, ul. Lenina, 5";

/// Runs the scenario, writing one line per step to `out`.
///
/// Returns the bank in its final state.
pub fn run_scenario<W: Write>(out: &mut W) -> DemoResult<Bank> {
    let mut bank = Bank::new();
    let mut alice = Customer::new(ALICE_NAME, ALICE_ADDRESS);
    let mut bob = Customer::new(BOB_NAME, BOB_ADDRESS);

    let alice_account = alice.open_account(&mut bank, 500.0);
    alice_account.deposit(100.0)?;
    writeln!(out, "Alice's balance: {:?}", alice_account.balance())?;
    let alice_number = alice_account.account_number();

    let bob_account = bob.open_account(&mut bank, 1000.0);
    bob_account.deposit(500.0)?;
    writeln!(out, "Bob's balance: {:?}", bob_account.balance())?;

    let alice_account = bank.get_account_mut(alice_number)?;
    alice_account.withdraw(300.0)?;
    writeln!(out, "Alice's balance: {:?}", alice_account.balance())?;

    match alice_account.withdraw(500.0) {
        Ok(()) => {}
        Err(err @ LedgerError::InsufficientFunds { .. }) => writeln!(out, "{err}")?,
        Err(err) => return Err(err.into()),
    }

    let retrieved = bank.get_account(alice_number)?;
    writeln!(out, "{retrieved}")?;

    info!(accounts = bank.len(), "scenario complete");
    Ok(bank)
}

// =============================================================================
// Unit Tests
// =============================================================================
