//! Account-related types
//!
//! This module defines the BankAccount structure and the balance operations
//! it exposes: top-up, withdrawal, one-time balance seeding, and the
//! formatted lookups used by the demo driver.
//!
//! # Balance Model
//!
//! Balances are integer USD amounts stored as `i64`. The balance of an
//! account never goes negative: top-ups reject non-positive amounts and
//! withdrawals reject requests above the balance. All balance updates use
//! checked arithmetic and reject the operation instead of wrapping.

use super::customer::SharedCustomer;
use super::error::BankError;
use crate::core::traits::{AccountHolder, DepositAccount};

/// Account number
///
/// Issued by [`Bank`](crate::core::bank::Bank) starting at 1, from a counter
/// independent of customer numbering; 0 is never issued.
pub type AccountNumber = u32;

/// A bank account owned by a single customer
///
/// Holds the balance and a shared handle to the owning customer. The account
/// does not manage the customer's lifetime; several accounts may share one
/// owner.
///
/// A fresh account starts at balance 0 and may have its starting balance
/// seeded directly exactly once. The first successful top-up or seed closes
/// that window permanently; withdrawals leave it open.
#[derive(Debug)]
pub struct BankAccount {
    /// Shared handle to the owning customer
    owner: SharedCustomer,

    /// Current balance in whole USD
    ///
    /// Invariant: never negative. Maintained by the operation guards, not
    /// by the type.
    balance: i64,

    /// Account number issued at construction
    account_number: AccountNumber,

    /// Whether the one-time balance seed is still available
    ///
    /// True from construction until the first successful top-up or seed.
    seedable: bool,
}

impl BankAccount {
    /// Create an account with an already-issued number
    ///
    /// Only [`Bank`](crate::core::bank::Bank) constructs accounts, which is
    /// what keeps account numbers unique and strictly increasing.
    pub(crate) fn new(owner: SharedCustomer, account_number: AccountNumber) -> Self {
        BankAccount {
            owner,
            balance: 0,
            account_number,
            seedable: true,
        }
    }
}

impl DepositAccount for BankAccount {
    /// Add funds to the account
    ///
    /// Rejects non-positive amounts with [`BankError::InvalidAmount`],
    /// leaving the balance unchanged. On success the one-time seed window
    /// closes and the confirmation message embeds the deposited amount and
    /// the resulting balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount <= 0`
    /// - Adding the amount to the balance would overflow
    fn top_up(&mut self, amount: i64) -> Result<String, BankError> {
        if amount <= 0 {
            return Err(BankError::invalid_amount("top up", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::balance_overflow("top up", self.account_number))?;

        self.balance = new_balance;
        self.seedable = false;

        tracing::debug!(
            account = self.account_number,
            amount,
            balance = self.balance,
            "topped up account"
        );

        Ok(format!(
            "You have topped up {} USD. Current balance: {} USD",
            amount, self.balance
        ))
    }

    /// Remove funds from the account
    ///
    /// Rejects requests above the balance with
    /// [`BankError::InsufficientFunds`], leaving the balance unchanged.
    /// There is no positivity check: zero and negative requests within the
    /// balance are accepted, and a negative request credits the account.
    /// The seed window is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount > balance`
    /// - Subtracting the amount from the balance would overflow
    fn withdraw(&mut self, amount: i64) -> Result<String, BankError> {
        if amount > self.balance {
            return Err(BankError::insufficient_funds(
                self.account_number,
                self.balance,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::balance_overflow("withdrawal", self.account_number))?;

        self.balance = new_balance;

        tracing::debug!(
            account = self.account_number,
            amount,
            balance = self.balance,
            "withdrew from account"
        );

        Ok(format!(
            "You have withdrawn {} USD. Remaining balance: {} USD",
            amount, self.balance
        ))
    }

    fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Printable line with the account number
    fn account_number_line(&self) -> String {
        format!("Account number: {}", self.account_number)
    }

    /// The owner's summary, exactly as the owner reports it at call time
    fn owner_info(&self) -> String {
        self.owner.borrow().info()
    }

    fn balance(&self) -> i64 {
        self.balance
    }

    /// Seed the starting balance, at most once per account
    ///
    /// Non-positive values are rejected with [`BankError::InvalidAmount`]
    /// whether or not the seed window is still open. A positive value is
    /// applied only while the window is open; afterwards the call is a
    /// silent no-op, logged at warn level.
    ///
    /// # Errors
    ///
    /// Returns an error if `value <= 0`.
    fn seed_balance(&mut self, value: i64) -> Result<(), BankError> {
        if value <= 0 {
            return Err(BankError::invalid_amount("balance seed", value));
        }

        if self.seedable {
            self.balance = value;
            self.seedable = false;

            tracing::debug!(
                account = self.account_number,
                value,
                "seeded starting balance"
            );
        } else {
            tracing::warn!(
                account = self.account_number,
                value,
                "ignoring balance seed for an already-seeded account"
            );
        }

        Ok(())
    }
}
