//! Minibank Library
//! # Overview
//!
//! This library provides a small consumer banking domain model built around
//! customers, deposit accounts, and a bank registry that issues identifiers
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Customer, BankAccount, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Customer and account creation with identifier issuance
//!   - [`core::traits`] - Behavioral contracts implemented by the domain types
//! - [`demo`] - Fixed demonstration scenario and its transcript writer
//!
//! # Account Operations
//!
//! A deposit account supports four operations:
//!
//! - **Top up**: Credit a positive amount of whole USD to the balance
//! - **Withdraw**: Debit an amount, rejected when it exceeds the current balance
//! - **Account number**: Report the number assigned when the account was opened
//! - **Owner info**: Report the owning customer's name, email, and id
//!
//! # Identifier Assignment
//!
//! A [`Bank`] value owns two independent counters:
//!
//! - Customer ids start at 1 and grow by one per created customer
//! - Account numbers start at 1 and grow by one per opened account
//!
//! Numbering is scoped to one [`Bank`] instance, so two separate banks issue
//! overlapping identifiers
//!
//! # Example
//!
//! ```
//! use minibank::{Bank, DepositAccount};
//!
//! let mut bank = Bank::new();
//! let customer = bank.create_customer("Ada", "ada@mail.com");
//! let mut account = bank.open_account(&customer);
//!
//! account.top_up(100).unwrap();
//! account.withdraw(40).unwrap();
//! assert_eq!(account.balance(), 60);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod demo;
pub mod types;

pub use self::core::{AccountHolder, Bank, DepositAccount};
pub use demo::DemoError;
pub use types::{AccountNumber, BankAccount, BankError, Customer, CustomerId, SharedCustomer};
