//! Capability traits for customers and accounts
//!
//! This module defines the two abstract capability sets of the domain. Each
//! has exactly one concrete implementation ([`Customer`] and
//! [`BankAccount`]); the traits document the contracts and keep the entity
//! surfaces explicit.
//!
//! [`Customer`]: crate::types::customer::Customer
//! [`BankAccount`]: crate::types::account::BankAccount

use crate::types::account::AccountNumber;
use crate::types::error::BankError;

/// Capability set of a bank customer
///
/// Provides the informational summary and the mutable email contact.
pub trait AccountHolder {
    /// Formatted multi-line summary with name, email and customer id
    fn info(&self) -> String;

    /// Current email address
    fn email(&self) -> &str;

    /// Replace the email address; any text is accepted
    fn set_email(&mut self, new_email: &str);
}

/// Capability set of a bank account
///
/// Provides deposits, withdrawals, balance inspection, the one-time balance
/// seed, and the formatted lookups.
pub trait DepositAccount {
    /// Add a positive amount to the balance and confirm it
    fn top_up(&mut self, amount: i64) -> Result<String, BankError>;

    /// Remove an amount within the balance and confirm it
    fn withdraw(&mut self, amount: i64) -> Result<String, BankError>;

    /// The raw account number
    fn account_number(&self) -> AccountNumber;

    /// Printable line with the account number
    fn account_number_line(&self) -> String;

    /// The owning customer's summary at call time
    fn owner_info(&self) -> String;

    /// Current balance in whole USD
    fn balance(&self) -> i64;

    /// Seed the starting balance; applies at most once per account
    fn seed_balance(&mut self, value: i64) -> Result<(), BankError>;
}
