//! Bank registry
//!
//! This module provides the `Bank` struct which owns the two numbering
//! counters and constructs all customers and accounts.
//!
//! The Bank is responsible for:
//! - Issuing customer ids (strictly increasing from 1)
//! - Issuing account numbers (strictly increasing from 1, independent of
//!   customer ids)
//! - Handing out the shared customer handle that accounts keep
//!
//! Numbering is scoped to the `Bank` value: a fresh `Bank` restarts both
//! sequences, which keeps numbering controllable in tests. Construction
//! takes `&mut self`, so issuing an id and building the entity is a single
//! exclusive step.

use crate::types::account::BankAccount;
use crate::types::customer::{Customer, SharedCustomer};
use std::cell::RefCell;
use std::rc::Rc;

/// Factory for customers and accounts
///
/// Owns the counters behind customer ids and account numbers. All entity
/// construction goes through the Bank; the entities themselves cannot be
/// built with arbitrary numbers.
#[derive(Debug)]
pub struct Bank {
    /// Customer ids issued so far; the next id is this plus one
    customers_issued: u32,

    /// Account numbers issued so far; the next number is this plus one
    accounts_issued: u32,
}

impl Bank {
    /// Create a bank with both sequences at their start
    ///
    /// The first customer created gets id 1 and the first account opened
    /// gets number 1.
    pub fn new() -> Self {
        Bank {
            customers_issued: 0,
            accounts_issued: 0,
        }
    }

    /// Create a customer with the next customer id
    ///
    /// Returns the shared handle under which accounts will reference the
    /// customer. The email is stored as given; no validation is performed.
    pub fn create_customer(&mut self, name: &str, email: &str) -> SharedCustomer {
        self.customers_issued += 1;
        let customer = Customer::new(name, email, self.customers_issued);

        tracing::debug!(
            customer_id = customer.customer_id(),
            name,
            "created customer"
        );

        Rc::new(RefCell::new(customer))
    }

    /// Open an account for an existing customer with the next account number
    ///
    /// The account starts at balance 0 with its one-time seed window open
    /// and shares ownership of the customer handle; opening several accounts
    /// for one customer is allowed.
    pub fn open_account(&mut self, owner: &SharedCustomer) -> BankAccount {
        self.accounts_issued += 1;

        tracing::debug!(
            account = self.accounts_issued,
            customer_id = owner.borrow().customer_id(),
            "opened account"
        );

        BankAccount::new(Rc::clone(owner), self.accounts_issued)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{AccountHolder, DepositAccount};

    #[test]
    fn test_first_customer_gets_id_one() {
        let mut bank = Bank::new();

        let customer = bank.create_customer("Davide Blane", "dave@mail.com");

        assert_eq!(customer.borrow().customer_id(), 1);
    }

    #[test]
    fn test_customer_ids_are_strictly_increasing_without_gaps() {
        let mut bank = Bank::new();

        let ids: Vec<u32> = (0..5)
            .map(|n| {
                bank.create_customer(&format!("Customer {}", n), "mail@mail.com")
                    .borrow()
                    .customer_id()
            })
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_account_numbers_are_independent_of_customer_ids() {
        let mut bank = Bank::new();

        let first = bank.create_customer("First", "first@mail.com");
        let second = bank.create_customer("Second", "second@mail.com");
        let third = bank.create_customer("Third", "third@mail.com");

        let account1 = bank.open_account(&second);
        let account2 = bank.open_account(&third);

        // Three customers issued, but account numbering starts at 1.
        assert_eq!(first.borrow().customer_id(), 1);
        assert_eq!(account1.account_number(), 1);
        assert_eq!(account2.account_number(), 2);
    }

    #[test]
    fn test_fresh_bank_restarts_numbering() {
        let mut bank = Bank::new();
        bank.create_customer("One", "one@mail.com");
        bank.create_customer("Two", "two@mail.com");

        let mut fresh = Bank::new();
        let customer = fresh.create_customer("Three", "three@mail.com");

        assert_eq!(customer.borrow().customer_id(), 1);
    }

    #[test]
    fn test_accounts_share_their_owner() {
        let mut bank = Bank::new();
        let owner = bank.create_customer("Mark", "mark@mail.ua");

        let checking = bank.open_account(&owner);
        let savings = bank.open_account(&owner);

        owner.borrow_mut().set_email("mark@newmail.ua");

        assert_eq!(checking.owner_info(), savings.owner_info());
        assert!(checking.owner_info().contains("mark@newmail.ua"));
    }

    #[test]
    fn test_default_matches_new() {
        let mut bank = Bank::default();

        let customer = bank.create_customer("Davide Blane", "dave@mail.com");

        assert_eq!(customer.borrow().customer_id(), 1);
    }

    #[test]
    fn test_two_customers_two_accounts_and_one_seed() {
        let mut bank = Bank::new();

        let dave = bank.create_customer("Davide Blane", "dave@mail.com");
        let mark = bank.create_customer("Mark", "mark@mail.ua");
        assert_eq!(dave.borrow().customer_id(), 1);
        assert_eq!(mark.borrow().customer_id(), 2);

        let dave_account = bank.open_account(&dave);
        let mut mark_account = bank.open_account(&mark);
        assert_eq!(dave_account.account_number(), 1);
        assert_eq!(mark_account.account_number(), 2);

        mark_account.seed_balance(222).unwrap();
        assert_eq!(mark_account.balance(), 222);

        mark_account.seed_balance(2202).unwrap();
        assert_eq!(mark_account.balance(), 222);
    }
}
