//! Demonstration scenario
//!
//! This module provides the fixed driver sequence behind the `minibank`
//! binary: it constructs two sample customers with one account each and
//! exercises the owner lookup, account-number lookup, and one-time balance
//! seed, writing a human-readable transcript to the given writer.
//!
//! The scenario is demonstration code, not part of the reusable domain
//! surface. It performs no error recovery: the first failed operation or
//! write aborts the run (the binary maps that to a non-zero exit).

use crate::core::bank::Bank;
use crate::core::traits::DepositAccount;
use crate::types::error::BankError;
use std::io::Write;
use thiserror::Error;

/// Error type for the demo pipeline
///
/// Wraps the two failure sources of the scenario: a rejected balance
/// operation and a failed transcript write.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the demonstration scenario, writing the transcript to `out`
///
/// The sequence:
/// 1. Create two customers (ids 1 and 2) and one account each (numbers 1
///    and 2).
/// 2. Print the first account's owner summary, the second account's number
///    line, and the second account's owner summary.
/// 3. Seed the second account with 222 USD and print the balance, then
///    attempt a second seed with 2202 USD and print the balance again; the
///    second seed is ignored, so both printed balances are 222.
///
/// # Errors
///
/// Returns an error if a balance operation is rejected or the writer fails.
/// The fixed sequence triggers neither on a functioning writer.
pub fn run(out: &mut dyn Write) -> Result<(), DemoError> {
    let mut bank = Bank::new();

    let dave = bank.create_customer("Davide Blane", "dave@mail.com");
    let mark = bank.create_customer("Mark", "mark@mail.ua");

    let dave_account = bank.open_account(&dave);
    let mut mark_account = bank.open_account(&mark);

    writeln!(out, "{}", dave_account.owner_info())?;
    writeln!(out, "{}", mark_account.account_number_line())?;
    writeln!(out, "{}", mark_account.owner_info())?;

    mark_account.seed_balance(222)?;
    writeln!(out, "{}", mark_account.balance())?;

    // The second seed lands after the window has closed and is ignored.
    mark_account.seed_balance(2202)?;
    writeln!(out, "{}", mark_account.balance())?;

    Ok(())
}
