//! Core business logic module
//!
//! This module contains the construction and contract side of the domain:
//! - `traits` - Capability sets implemented by the entities
//! - `bank` - Numbering registry that constructs customers and accounts

pub mod bank;
pub mod traits;

pub use bank::Bank;
pub use traits::{AccountHolder, DepositAccount};
