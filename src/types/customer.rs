//! Customer-related types
//!
//! This module defines the Customer entity and the shared handle through
//! which accounts reference their owner.

use crate::core::traits::AccountHolder;
use std::cell::RefCell;
use std::rc::Rc;

/// Customer identifier
///
/// Issued by [`Bank`](crate::core::bank::Bank) starting at 1; 0 is never
/// issued.
pub type CustomerId = u32;

/// Shared handle to a customer
///
/// Accounts hold this handle, so an email change made through one handle is
/// visible through every account owned by the customer. The model is
/// single-threaded, hence `Rc`/`RefCell` rather than `Arc`/`Mutex`.
pub type SharedCustomer = Rc<RefCell<Customer>>;

/// A customer of the bank
///
/// Holds identity and contact data. The name and id are fixed at creation;
/// only the email can be reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    email: String,
    customer_id: CustomerId,
}

impl Customer {
    /// Create a customer with an already-issued id
    ///
    /// Only [`Bank`](crate::core::bank::Bank) constructs customers, which is
    /// what keeps ids unique and strictly increasing.
    pub(crate) fn new(name: &str, email: &str, customer_id: CustomerId) -> Self {
        Customer {
            name: name.to_string(),
            email: email.to_string(),
            customer_id,
        }
    }

    /// The customer's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's id
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl AccountHolder for Customer {
    /// Multi-line summary with name, email and customer id
    fn info(&self) -> String {
        format!(
            "Customer: {}\nEmail: {}\nCustomer ID: {}",
            self.name, self.email, self.customer_id
        )
    }

    fn email(&self) -> &str {
        &self.email
    }

    /// Replace the email. Any text is accepted; no format validation is
    /// performed.
    fn set_email(&mut self, new_email: &str) {
        self.email = new_email.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_contains_name_email_and_id() {
        let customer = Customer::new("Davide Blane", "dave@mail.com", 1);

        assert_eq!(
            customer.info(),
            "Customer: Davide Blane\nEmail: dave@mail.com\nCustomer ID: 1"
        );
    }

    #[test]
    fn test_email_accessor() {
        let customer = Customer::new("Mark", "mark@mail.ua", 2);
        assert_eq!(customer.email(), "mark@mail.ua");
    }

    #[test]
    fn test_set_email_updates_email_and_info() {
        let mut customer = Customer::new("Mark", "mark@mail.ua", 2);

        customer.set_email("mark@newmail.ua");

        assert_eq!(customer.email(), "mark@newmail.ua");
        assert_eq!(
            customer.info(),
            "Customer: Mark\nEmail: mark@newmail.ua\nCustomer ID: 2"
        );
    }

    #[test]
    fn test_set_email_accepts_arbitrary_text() {
        let mut customer = Customer::new("Mark", "mark@mail.ua", 2);

        customer.set_email("definitely not an email");

        assert_eq!(customer.email(), "definitely not an email");
    }

    #[test]
    fn test_name_and_id_accessors() {
        let customer = Customer::new("Davide Blane", "dave@mail.com", 7);
        assert_eq!(customer.name(), "Davide Blane");
        assert_eq!(customer.customer_id(), 7);
    }
}
