//! # Customer
//!
//! A named party that asks a bank to open accounts on its behalf.
//!
//! A customer does not own accounts; the bank does. It only remembers the
//! numbers of the accounts it opened, so ownership never has to be guessed
//! from matching name or address strings.
//!
//! ```text
//! Customer::open_account(bank, 500.0)
//!      │
//!      ▼
//! Bank::create_account(name, address, 500.0)
//!      │
//!      ▼
//! &mut Account (number recorded on the customer)
//! ```

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::bank::Bank;
use crate::types::AccountNumber;

/// Request proxy for opening accounts under a fixed name and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    address: String,
    account_numbers: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            address: address.into(),
            account_numbers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Accounts opened through this customer, oldest first.
    ///
    /// Numbers are only meaningful at the bank they were opened at; a
    /// customer used with two banks mixes two independent sequences here.
    pub fn account_numbers(&self) -> &[AccountNumber] {
        &self.account_numbers
    }

    /// Opens an account at `bank` with this customer's name and address.
    ///
    /// No validation of its own; whatever `Bank::create_account` accepts is
    /// accepted here.
    ///
    /// ## Example
    /// ```rust
    /// use ledger_core::{Bank, Customer};
    ///
    /// let mut bank = Bank::new();
    /// let mut alice = Customer::new("Alice", "Moscow, Stremyannyi per, 1");
    ///
    /// let account = alice.open_account(&mut bank, 500.0);
    /// assert_eq!(account.customer_name(), "Alice");
    /// assert_eq!(account.balance(), 500.0);
    /// ```
    pub fn open_account<'b>(
        &mut self,
        bank: &'b mut Bank,
        initial_balance: f64,
    ) -> &'b mut Account {
        let account = bank.create_account(
            self.name.as_str(),
            self.address.as_str(),
            initial_balance,
        );
        self.account_numbers.push(account.account_number());
        account
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_account_copies_name_and_address() {
        let mut bank = Bank::new();
        let mut bob = Customer::new("Bob", "Vorkuta, ul. Lenina, 5");

        let account = bob.open_account(&mut bank, 1000.0);
        assert_eq!(account.customer_name(), "Bob");
        assert_eq!(account.customer_address(), "Vorkuta, ul. Lenina, 5");
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_customers_share_one_number_sequence() {
        let mut bank = Bank::new();
        let mut alice = Customer::new("Alice", "Moscow");
        let mut bob = Customer::new("Bob", "Vorkuta");

        alice.open_account(&mut bank, 1.0);
        bob.open_account(&mut bank, 1.0);
        alice.open_account(&mut bank, 1.0);

        let alice_numbers: Vec<u64> = alice.account_numbers().iter().map(|n| n.get()).collect();
        let bob_numbers: Vec<u64> = bob.account_numbers().iter().map(|n| n.get()).collect();
        assert_eq!(alice_numbers, vec![1, 3]);
        assert_eq!(bob_numbers, vec![2]);
    }

    #[test]
    fn test_namesakes_keep_separate_accounts() {
        let mut bank = Bank::new();
        let mut first = Customer::new("Alice", "Moscow");
        let mut second = Customer::new("Alice", "Moscow");

        first.open_account(&mut bank, 10.0);
        second.open_account(&mut bank, 20.0);

        assert_eq!(first.account_numbers(), &[AccountNumber::new(1)]);
        assert_eq!(second.account_numbers(), &[AccountNumber::new(2)]);
    }

    #[test]
    fn test_numbers_from_two_banks_are_independent() {
        let mut first_bank = Bank::new();
        let mut second_bank = Bank::new();
        let mut alice = Customer::new("Alice", "Moscow");

        alice.open_account(&mut first_bank, 10.0);
        alice.open_account(&mut second_bank, 20.0);

        assert_eq!(
            alice.account_numbers(),
            &[AccountNumber::new(1), AccountNumber::new(1)]
        );
        assert_eq!(first_bank.get_account(AccountNumber::FIRST).unwrap().balance(), 10.0);
        assert_eq!(second_bank.get_account(AccountNumber::FIRST).unwrap().balance(), 20.0);
    }
}
