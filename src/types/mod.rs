//! Types module
//!
//! Contains the domain entities used throughout the crate.
//! This module organizes types into logical submodules:
//! - `customer`: Customer entity and the shared owner handle
//! - `account`: BankAccount entity and balance operations
//! - `error`: Error types for balance operations

pub mod account;
pub mod customer;
pub mod error;

pub use account::{AccountNumber, BankAccount};
pub use customer::{Customer, CustomerId, SharedCustomer};
pub use error::BankError;
