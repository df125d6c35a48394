//! Error types for the minibank domain
//!
//! This module defines all errors that balance operations can raise.
//! Errors are descriptive enough to be printed as-is by the demo binary.
//!
//! # Error Categories
//!
//! - **Validation Errors**: a non-positive amount was supplied where a
//!   positive one is required
//! - **Balance Errors**: a withdrawal requested more than the account holds
//! - **Arithmetic Errors**: an `i64` balance update would overflow
//!
//! All errors are raised synchronously at the point of violation and are
//! never caught inside the library; callers decide whether to recover.

use super::account::AccountNumber;
use thiserror::Error;

/// Main error type for bank account operations
///
/// Each variant carries the context needed to diagnose the rejected
/// operation: the operation name, the offending amount, and the account
/// balance where relevant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// A non-positive amount was supplied to an operation that requires
    /// a positive one (top-up or balance seed).
    ///
    /// The target balance is left unchanged.
    #[error("Invalid amount {amount} USD for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The offending amount
        amount: i64,
    },

    /// A withdrawal requested more than the account balance
    ///
    /// The withdrawal is rejected and the balance is left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance} USD, requested {requested} USD")]
    InsufficientFunds {
        /// Account number of the rejected withdrawal
        account: AccountNumber,
        /// Balance at the time of the request
        balance: i64,
        /// Requested withdrawal amount
        requested: i64,
    },

    /// An `i64` balance update would overflow
    ///
    /// The operation is rejected to keep the stored balance meaningful.
    /// Unreachable with realistic USD amounts; exists so the library never
    /// wraps silently.
    #[error("Balance overflow in {operation} for account {account}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number of the rejected operation
        account: AccountNumber,
    },
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: i64) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: i64, requested: i64) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::BalanceOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_top_up(
        BankError::InvalidAmount { operation: "top up".to_string(), amount: -5 },
        "Invalid amount -5 USD for top up: amount must be positive"
    )]
    #[case::invalid_seed(
        BankError::InvalidAmount { operation: "balance seed".to_string(), amount: 0 },
        "Invalid amount 0 USD for balance seed: amount must be positive"
    )]
    #[case::insufficient_funds(
        BankError::InsufficientFunds { account: 2, balance: 100, requested: 150 },
        "Insufficient funds in account 2: balance 100 USD, requested 150 USD"
    )]
    #[case::balance_overflow(
        BankError::BalanceOverflow { operation: "withdrawal".to_string(), account: 1 },
        "Balance overflow in withdrawal for account 1"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        BankError::invalid_amount("top up", 0),
        BankError::InvalidAmount { operation: "top up".to_string(), amount: 0 }
    )]
    #[case::insufficient_funds(
        BankError::insufficient_funds(1, 50, 80),
        BankError::InsufficientFunds { account: 1, balance: 50, requested: 80 }
    )]
    #[case::balance_overflow(
        BankError::balance_overflow("top up", 3),
        BankError::BalanceOverflow { operation: "top up".to_string(), account: 3 }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }
}
