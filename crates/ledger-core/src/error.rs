//! # Error Types
//!
//! Domain error types for ledger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ledger-core errors (this file)                                        │
//! │  ├── LedgerError                                                       │
//! │  │   ├── InvalidAmount      - deposit/withdrawal amount <= 0           │
//! │  │   ├── InsufficientFunds  - withdrawal larger than the balance       │
//! │  │   └── AccountNotFound    - lookup of an unknown account number      │
//! │  └── SnapshotError          - restored bank that breaks numbering      │
//! │                                                                         │
//! │  ledger-demo errors (separate crate)                                   │
//! │  └── DemoError              - wraps LedgerError, I/O, snapshot         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is a rejected precondition. None of them leaves an account
//! or the bank partially modified.

use thiserror::Error;

use crate::types::{AccountNumber, TransactionKind};

// =============================================================================
// Ledger Error
// =============================================================================

/// Rejections raised by accounts and the bank registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero, negative or not a finite number.
    ///
    /// ## When This Occurs
    /// - `Account::deposit(0.0)` or any negative deposit
    /// - `Account::withdraw(-5.0)` or any non-positive withdrawal
    /// - NaN or infinite amounts for either operation
    #[error("{kind} amount must be positive")]
    InvalidAmount { kind: TransactionKind, amount: f64 },

    /// Withdrawal exceeds the current balance.
    ///
    /// ## User Workflow
    /// ```text
    /// Balance: 300.0
    ///      │
    ///      ▼
    /// withdraw(500.0)
    ///      │
    ///      ▼
    /// InsufficientFunds { requested: 500.0, available: 300.0 }
    ///      │
    ///      ▼
    /// Balance stays 300.0
    /// ```
    #[error("Insufficient funds: requested {requested:?}, available {available:?}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// No account is registered under the requested number.
    #[error("Account {0} not found")]
    AccountNotFound(AccountNumber),
}

// =============================================================================
// Snapshot Error
// =============================================================================

/// A serialized bank that would break account numbering if restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Account numbers start at 1.
    #[error("account number 0 is not allowed")]
    ZeroAccountNumber,

    /// An account is stored under a key other than its own number.
    #[error("account {account} stored under key {key}")]
    MismatchedKey {
        key: AccountNumber,
        account: AccountNumber,
    },

    /// The counter would reissue an existing number.
    #[error("next account number {next} is not above highest existing {highest}")]
    StaleCounter {
        next: AccountNumber,
        highest: AccountNumber,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
