//! # Bank
//!
//! The registry that opens accounts and looks them up by number.
//!
//! ## Registry Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Bank                                       │
//! │                                                                         │
//! │  next_account_number: 3                                                 │
//! │                                                                         │
//! │  accounts (BTreeMap, creation order):                                   │
//! │  ┌────┬──────────────────────────────────────────────────────────┐      │
//! │  │ 1  │ Account { Alice, "Moscow, Stremyannyi per, 1", 300.0 }    │      │
//! │  │ 2  │ Account { Bob,   "Vorkuta, ul. Lenina, 5",    1500.0 }    │      │
//! │  └────┴──────────────────────────────────────────────────────────┘      │
//! │                                                                         │
//! │  create_account ──► take next number ──► insert ──► &mut Account        │
//! │  get_account    ──► lookup ──► &Account | AccountNotFound(n)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counter is separate from the map so numbers stay unique even if
//! accounts could ever be removed.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::account::Account;
use crate::error::{LedgerError, LedgerResult, SnapshotError};
use crate::types::AccountNumber;

/// Owns every account it opens.
///
/// Deserialization goes through [`BankSnapshot`] so a restored bank can
/// never hand out a number that is zero or already taken.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "BankSnapshot")]
pub struct Bank {
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
}

/// Unchecked wire form of a [`Bank`].
#[derive(Debug, Deserialize)]
struct BankSnapshot {
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
}

impl TryFrom<BankSnapshot> for Bank {
    type Error = SnapshotError;

    /// ## Rules
    /// - Every key is positive and matches the account stored under it
    /// - The counter is positive and above every key
    fn try_from(snapshot: BankSnapshot) -> Result<Self, Self::Error> {
        let BankSnapshot {
            accounts,
            next_account_number,
        } = snapshot;

        for (key, account) in &accounts {
            if key.get() == 0 {
                return Err(SnapshotError::ZeroAccountNumber);
            }
            if account.account_number() != *key {
                return Err(SnapshotError::MismatchedKey {
                    key: *key,
                    account: account.account_number(),
                });
            }
        }

        if next_account_number.get() == 0 {
            return Err(SnapshotError::ZeroAccountNumber);
        }
        if let Some(highest) = accounts.keys().next_back() {
            if next_account_number <= *highest {
                return Err(SnapshotError::StaleCounter {
                    next: next_account_number,
                    highest: *highest,
                });
            }
        }

        Ok(Bank {
            accounts,
            next_account_number,
        })
    }
}

impl Bank {
    /// Creates an empty bank. The first account will get number 1.
    pub fn new() -> Self {
        Bank::default()
    }

    /// Opens an account and registers it.
    ///
    /// Never fails. `initial_balance` is accepted as given, including zero,
    /// negative and non-finite values; the last two are logged at `warn`.
    ///
    /// ## Example
    /// ```rust
    /// use ledger_core::{AccountNumber, Bank};
    ///
    /// let mut bank = Bank::new();
    /// let alice = bank.create_account("Alice", "Moscow", 500.0).account_number();
    /// let bob = bank.create_account("Bob", "Vorkuta", 1000.0).account_number();
    ///
    /// assert_eq!(alice, AccountNumber::new(1));
    /// assert_eq!(bob, AccountNumber::new(2));
    /// ```
    pub fn create_account(
        &mut self,
        customer_name: impl Into<String>,
        customer_address: impl Into<String>,
        initial_balance: f64,
    ) -> &mut Account {
        let account_number = self.allocate_account_number();
        let account = Account::new(
            account_number,
            customer_name,
            customer_address,
            initial_balance,
        );

        if is_irregular_opening_balance(initial_balance) {
            warn!(
                account = %account_number,
                initial_balance,
                "account opened with negative or non-finite balance"
            );
        }
        debug!(
            account = %account_number,
            customer = account.customer_name(),
            initial_balance,
            "account opened"
        );

        // Counter is always above every key, so the slot is vacant. If that
        // ever breaks, the new account still wins over the old one.
        match self.accounts.entry(account_number) {
            Entry::Vacant(slot) => slot.insert(account),
            Entry::Occupied(mut slot) => {
                debug_assert!(false, "account number {account_number} allocated twice");
                slot.insert(account);
                slot.into_mut()
            }
        }
    }

    /// Looks up an account by number.
    ///
    /// ## Errors
    /// `AccountNotFound` carrying the requested number.
    pub fn get_account(&self, account_number: AccountNumber) -> LedgerResult<&Account> {
        self.accounts
            .get(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    /// Mutable lookup, for deposits and withdrawals on a known number.
    pub fn get_account_mut(
        &mut self,
        account_number: AccountNumber,
    ) -> LedgerResult<&mut Account> {
        self.accounts
            .get_mut(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    /// Iterates accounts in the order they were opened.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of accounts opened so far.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number the next `create_account` call will assign.
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_account_number
    }

    fn allocate_account_number(&mut self) -> AccountNumber {
        let number = self.next_account_number;
        self.next_account_number = number.successor();
        number
    }
}

/// Opening balances that are accepted but logged: negative, NaN or infinite.
fn is_irregular_opening_balance(balance: f64) -> bool {
    !balance.is_finite() || balance < 0.0
}

// =============================================================================
// Unit Tests
// =============================================================================
