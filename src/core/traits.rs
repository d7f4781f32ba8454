//! Core trait for the account primitive
//!
//! This module defines the call interface that the workload strategies and the
//! interactive session are written against.

use crate::types::{Amount, BankError};

/// Trait for a thread-safe single-balance bank client
///
/// Every method takes `&self` and must be safe to invoke from any number of
/// concurrent callers. Implementations guarantee that deposit and withdraw are
/// linearizable and that `balance` never observes a half-applied mutation.
pub trait BankClient: Send + Sync {
    /// Credit `amount` to the balance
    fn deposit(&self, amount: Amount);

    /// Debit `amount` if the balance covers it, otherwise leave it unchanged
    fn withdraw(&self, amount: Amount) -> Result<(), BankError>;

    /// Get a consistent snapshot of the current balance
    fn balance(&self) -> Amount;
}
