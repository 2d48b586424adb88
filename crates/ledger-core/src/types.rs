//! # Domain Types
//!
//! Small value types shared by the entity model.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐              ┌─────────────────┐                   │
//! │  │  AccountNumber  │              │ TransactionKind │                   │
//! │  │  ─────────────  │              │  ─────────────  │                   │
//! │  │  u64, from 1    │              │  Deposit        │                   │
//! │  │  never reused   │              │  Withdrawal     │                   │
//! │  └─────────────────┘              └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Account Number
// =============================================================================

/// Identifier the bank assigns to every account it opens.
///
/// ## Allocation Rules
/// - The first account of a bank gets `1`
/// - Every later account gets the previous number plus one
/// - Numbers are never reused and never derived from the registry size
///
/// Ordering follows allocation order, so a `BTreeMap<AccountNumber, _>`
/// iterates accounts in the order they were opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Number given to the first account of a fresh bank.
    pub const FIRST: AccountNumber = AccountNumber(1);

    /// Wraps a raw account number.
    ///
    /// ## Example
    /// ```rust
    /// use ledger_core::AccountNumber;
    ///
    /// let number = AccountNumber::new(42);
    /// assert_eq!(number.get(), 42);
    /// assert_eq!(number.to_string(), "42");
    /// ```
    #[inline]
    pub const fn new(raw: u64) -> Self {
        AccountNumber(raw)
    }

    /// Returns the raw number.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the number allocated right after this one.
    #[inline]
    pub(crate) const fn successor(&self) -> Self {
        AccountNumber(self.0 + 1)
    }
}

impl Default for AccountNumber {
    fn default() -> Self {
        AccountNumber::FIRST
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountNumber {
    fn from(raw: u64) -> Self {
        AccountNumber(raw)
    }
}

// =============================================================================
// Transaction Kind
// =============================================================================

/// The two balance mutations an account supports.
///
/// Carried by `LedgerError::InvalidAmount` so the message names the
/// operation that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money paid into the account.
    Deposit,

    /// Money taken out of the account.
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
