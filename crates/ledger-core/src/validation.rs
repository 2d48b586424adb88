//! # Validation Module
//!
//! Guards checked before an account balance changes.
//!
//! ## Where Checks Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Balance Mutation Guards                            │
//! │                                                                         │
//! │  deposit(amount)                withdraw(amount)                        │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  validate_amount ◄────────────► validate_amount                         │
//! │       │                              │                                  │
//! │       │                              ▼                                  │
//! │       │                         validate_withdrawal                     │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  balance += amount              balance -= amount                       │
//! │                                                                         │
//! │  A failing guard returns before the balance is touched.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening balances are not checked here; see `Bank::create_account`.

use crate::error::{LedgerError, LedgerResult};
use crate::types::TransactionKind;

/// Validates a deposit or withdrawal amount.
///
/// ## Rules
/// - Must be strictly positive
/// - Must be finite (NaN and infinities are rejected)
///
/// ## Example
/// ```rust
/// use ledger_core::validation::validate_amount;
/// use ledger_core::TransactionKind;
///
/// assert!(validate_amount(TransactionKind::Deposit, 100.0).is_ok());
/// assert!(validate_amount(TransactionKind::Deposit, 0.0).is_err());
/// assert!(validate_amount(TransactionKind::Withdrawal, f64::NAN).is_err());
/// ```
pub fn validate_amount(kind: TransactionKind, amount: f64) -> LedgerResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidAmount { kind, amount });
    }

    Ok(())
}

/// Validates that `amount` can be taken out of `balance`.
///
/// Withdrawing exactly the whole balance is allowed and leaves zero.
pub fn validate_withdrawal(amount: f64, balance: f64) -> LedgerResult<()> {
    if amount > balance {
        return Err(LedgerError::InsufficientFunds {
            requested: amount,
            available: balance,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(TransactionKind::Deposit, 0.01).is_ok());
        assert!(validate_amount(TransactionKind::Deposit, 1_000_000.0).is_ok());

        assert!(validate_amount(TransactionKind::Deposit, 0.0).is_err());
        assert!(validate_amount(TransactionKind::Deposit, -0.0).is_err());
        assert!(validate_amount(TransactionKind::Deposit, -10.0).is_err());
        assert!(validate_amount(TransactionKind::Deposit, f64::INFINITY).is_err());
        assert!(validate_amount(TransactionKind::Withdrawal, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_amount_reports_kind() {
        let err = validate_amount(TransactionKind::Withdrawal, -3.0).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidAmount {
                kind: TransactionKind::Withdrawal,
                amount: -3.0,
            }
        );
    }

    #[test]
    fn test_validate_withdrawal() {
        assert!(validate_withdrawal(100.0, 300.0).is_ok());
        assert!(validate_withdrawal(300.0, 300.0).is_ok());

        let err = validate_withdrawal(500.0, 300.0).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: 500.0,
                available: 300.0,
            }
        );
    }
}
