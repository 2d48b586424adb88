//! # Account
//!
//! A single customer account: identity fields plus a guarded balance.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Account Lifecycle                               │
//! │                                                                         │
//! │  Bank::create_account ──► Account { number, name, address, balance }    │
//! │                                   │                                     │
//! │                      ┌────────────┴────────────┐                        │
//! │                      ▼                         ▼                        │
//! │                 deposit(amount)          withdraw(amount)               │
//! │                 amount > 0               amount > 0                     │
//! │                                          amount <= balance              │
//! │                                                                         │
//! │  No close/freeze state. Accounts live as long as their bank.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are plain `f64`. There is no rounding or currency precision
//! handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::LedgerResult;
use crate::types::{AccountNumber, TransactionKind};
use crate::validation::{validate_amount, validate_withdrawal};

/// A bank account owned by the [`Bank`](crate::Bank) that opened it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    account_number: AccountNumber,
    customer_name: String,
    customer_address: String,
    balance: f64,
}

impl Account {
    /// Only the bank opens accounts, so it alone hands out numbers.
    pub(crate) fn new(
        account_number: AccountNumber,
        customer_name: impl Into<String>,
        customer_address: impl Into<String>,
        balance: f64,
    ) -> Self {
        Account {
            account_number,
            customer_name: customer_name.into(),
            customer_address: customer_address.into(),
            balance,
        }
    }

    /// Number assigned by the bank.
    #[inline]
    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Name copied from the customer at opening time.
    #[inline]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Address copied from the customer at opening time.
    #[inline]
    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    /// Current balance.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Pays `amount` into the account.
    ///
    /// ## Errors
    /// `InvalidAmount` when `amount` is not a positive finite number.
    /// The balance is unchanged on error.
    ///
    /// ## Example
    /// ```rust
    /// use ledger_core::Bank;
    ///
    /// let mut bank = Bank::new();
    /// let account = bank.create_account("Alice", "Moscow", 500.0);
    /// account.deposit(100.0).unwrap();
    /// assert_eq!(account.balance(), 600.0);
    /// ```
    pub fn deposit(&mut self, amount: f64) -> LedgerResult<()> {
        validate_amount(TransactionKind::Deposit, amount)?;

        self.balance += amount;
        debug!(
            account = %self.account_number,
            amount,
            balance = self.balance,
            "deposit applied"
        );
        Ok(())
    }

    /// Takes `amount` out of the account.
    ///
    /// All-or-nothing: either the whole amount is withdrawn or the balance
    /// is left as it was.
    ///
    /// ## Errors
    /// - `InvalidAmount` when `amount` is not a positive finite number
    /// - `InsufficientFunds` when `amount` exceeds the balance
    pub fn withdraw(&mut self, amount: f64) -> LedgerResult<()> {
        validate_amount(TransactionKind::Withdrawal, amount)?;
        validate_withdrawal(amount, self.balance)?;

        self.balance -= amount;
        debug!(
            account = %self.account_number,
            amount,
            balance = self.balance,
            "withdrawal applied"
        );
        Ok(())
    }
}

/// Renders the full record, e.g.
/// `Account 1 by Alice (Moscow, Stremyannyi per, 1), balance 300.0`.
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} by {} ({}), balance {:?}",
            self.account_number, self.customer_name, self.customer_address, self.balance
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use proptest::prelude::*;

    fn account(balance: f64) -> Account {
        Account::new(AccountNumber::FIRST, "Alice", "Moscow, Stremyannyi per, 1", balance)
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut acc = account(500.0);
        acc.deposit(100.0).unwrap();
        assert_eq!(acc.balance(), 600.0);
    }

    #[test]
    fn test_non_positive_deposit_is_rejected() {
        let mut acc = account(500.0);

        for amount in [0.0, -1.0, -500.0] {
            let err = acc.deposit(amount).unwrap_err();
            assert!(matches!(
                err,
                LedgerError::InvalidAmount {
                    kind: TransactionKind::Deposit,
                    ..
                }
            ));
        }
        assert_eq!(acc.balance(), 500.0);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut acc = account(600.0);
        acc.withdraw(300.0).unwrap();
        assert_eq!(acc.balance(), 300.0);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut acc = account(300.0);
        acc.withdraw(300.0).unwrap();
        assert_eq!(acc.balance(), 0.0);
    }

    #[test]
    fn test_non_positive_withdrawal_is_rejected() {
        let mut acc = account(300.0);

        let err = acc.withdraw(0.0).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidAmount {
                kind: TransactionKind::Withdrawal,
                ..
            }
        ));
        assert!(acc.withdraw(-20.0).is_err());
        assert_eq!(acc.balance(), 300.0);
    }

    #[test]
    fn test_overdraft_is_rejected_not_clamped() {
        let mut acc = account(300.0);

        let err = acc.withdraw(500.0).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: 500.0,
                available: 300.0,
            }
        );
        assert_eq!(acc.balance(), 300.0);
    }

    /// A non-positive amount is reported as InvalidAmount even when it would
    /// also exceed a negative opening balance.
    #[test]
    fn test_invalid_amount_checked_before_funds() {
        let mut acc = account(-50.0);
        let err = acc.withdraw(-10.0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount { .. }));
    }

    #[test]
    fn test_display_record() {
        let acc = account(300.0);
        assert_eq!(
            acc.to_string(),
            "Account 1 by Alice (Moscow, Stremyannyi per, 1), balance 300.0"
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(f64),
        Withdraw(f64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-100.0f64..1_000.0).prop_map(Op::Deposit),
            (-100.0f64..1_000.0).prop_map(Op::Withdraw),
        ]
    }

    proptest! {
        /// Final balance equals the opening balance plus accepted deposits
        /// minus accepted withdrawals, and never dips below zero.
        #[test]
        fn prop_balance_is_conserved(
            opening in 0.0f64..5_000.0,
            ops in prop::collection::vec(op_strategy(), 0..64),
        ) {
            let mut acc = account(opening);
            let mut expected = opening;

            for op in ops {
                let before = acc.balance();
                match op {
                    Op::Deposit(amount) => match acc.deposit(amount) {
                        Ok(()) => expected += amount,
                        Err(_) => prop_assert_eq!(acc.balance(), before),
                    },
                    Op::Withdraw(amount) => match acc.withdraw(amount) {
                        Ok(()) => expected -= amount,
                        Err(_) => prop_assert_eq!(acc.balance(), before),
                    },
                }
                prop_assert!(acc.balance() >= 0.0);
            }

            prop_assert_eq!(acc.balance(), expected);
        }
    }
}
