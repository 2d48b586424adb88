//! # ledger-core: In-Memory Banking Ledger
//!
//! Accounts, the bank registry that opens them, and customers that ask the
//! bank for new accounts. Everything lives in memory; nothing here prints,
//! reads the environment or touches a file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Ledger Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                ledger-demo (scenario driver)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ledger-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐          │   │
//! │  │   │ Customer  │ ───► │   Bank    │ ───► │  Account  │          │   │
//! │  │   │ name/addr │      │ registry  │      │  balance  │          │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • SINGLE-THREADED • NO PERSISTENCE                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`account`] - Account with guarded deposit/withdraw
//! - [`bank`] - Account registry and number allocation
//! - [`customer`] - Opens accounts on behalf of a named party
//! - [`error`] - Domain error types
//! - [`types`] - Account numbers and transaction kinds
//! - [`validation`] - Amount and funds checks
//!
//! ## Example Usage
//!
//! ```rust
//! use ledger_core::{Bank, Customer, LedgerError};
//!
//! let mut bank = Bank::new();
//! let mut alice = Customer::new("Alice", "Moscow, Stremyannyi per, 1");
//!
//! let number = alice.open_account(&mut bank, 500.0).account_number();
//! let account = bank.get_account_mut(number).unwrap();
//! account.deposit(100.0).unwrap();
//! account.withdraw(300.0).unwrap();
//!
//! let err = account.withdraw(500.0).unwrap_err();
//! assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
//! assert_eq!(bank.get_account(number).unwrap().balance(), 300.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod account;
pub mod bank;
pub mod customer;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use account::Account;
pub use bank::Bank;
pub use customer::Customer;
pub use error::{LedgerError, LedgerResult, SnapshotError};
pub use types::{AccountNumber, TransactionKind};
