//! Thread-safe account primitive
//!
//! This module provides the `Account` struct, which holds a single integer
//! balance and exposes deposit, withdraw and balance operations that are safe
//! to call from any number of threads or tokio tasks.
//!
//! # Design
//!
//! The balance lives behind one `parking_lot::RwLock`:
//! - `deposit` and `withdraw` take the write half, so every read-modify-write
//!   is serialized and the set of applied mutations is linearizable
//! - the sufficiency check in `withdraw` and the subtraction run under the same
//!   guard, so nothing can interleave between them
//! - `balance` takes the read half, so it never sees a value between the check
//!   and the write of an in-flight withdrawal
//!
//! Guards are scoped and released on every exit path. `parking_lot` locks do not
//! poison, so a panicking caller elsewhere cannot turn these operations fallible.
//!
//! Arithmetic wraps on overflow instead of panicking; amounts are not range-checked.

use super::traits::BankClient;
use crate::types::{Amount, BankError};
use parking_lot::RwLock;

/// Single shared balance guarded by a reader/writer lock
///
/// Constructed once by the caller and shared by reference (or `Arc`) with
/// every task that needs it.
#[derive(Debug, Default)]
pub struct Account {
    balance: RwLock<Amount>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new() -> Self {
        Self {
            balance: RwLock::new(0),
        }
    }

    /// Credit `amount` to the balance
    ///
    /// Always succeeds. Concurrent deposits never lose an update.
    pub fn deposit(&self, amount: Amount) {
        let mut balance = self.balance.write();
        *balance = balance.wrapping_add(amount);
    }

    /// Debit `amount` if the balance covers it
    ///
    /// # Returns
    ///
    /// * `Ok(())` if `balance >= amount`; the amount has been subtracted
    /// * `Err(BankError::InsufficientFunds)` otherwise; the balance is unchanged
    ///
    /// The check and the subtraction happen under one write guard.
    pub fn withdraw(&self, amount: Amount) -> Result<(), BankError> {
        let mut balance = self.balance.write();

        if *balance < amount {
            return Err(BankError::insufficient_funds(*balance, amount));
        }

        *balance = balance.wrapping_sub(amount);
        Ok(())
    }

    /// Get the current balance
    ///
    /// The returned value is a point-in-time snapshot; it may be stale as soon
    /// as the read guard is released.
    pub fn balance(&self) -> Amount {
        *self.balance.read()
    }
}

impl BankClient for Account {
    fn deposit(&self, amount: Amount) {
        Account::deposit(self, amount)
    }

    fn withdraw(&self, amount: Amount) -> Result<(), BankError> {
        Account::withdraw(self, amount)
    }

    fn balance(&self) -> Amount {
        Account::balance(self)
    }
}
