//! Error types for the bank client
//!
//! This module defines all error types that can occur in the crate.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Domain Errors** ([`BankError`]): the account refused an operation. The
//!   only one is insufficient funds, and it is never fatal.
//! - **Application Errors** ([`AppError`]): input parsing, runtime construction,
//!   task failures and terminal I/O in the layers around the account.

use super::operation::Amount;
use thiserror::Error;

/// Domain error returned by the account
///
/// The account returns this synchronously to the caller and never logs,
/// retries or suppresses it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Withdrawal amount exceeds the balance at the moment of the atomic check
    ///
    /// The balance is left unchanged.
    #[error(
        "insufficient balance for withdrawal, operation cannot be performed (balance {balance}, requested {requested})"
    )]
    InsufficientFunds {
        /// Balance observed under the lock
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },
}

impl BankError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Amount, requested: Amount) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }
}

/// Error type for everything outside the account primitive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The session could not read an integer amount
    ///
    /// This is a recoverable error - the command is aborted and the
    /// user is asked to enter it again.
    #[error("invalid amount")]
    InvalidAmount {
        /// The raw input that failed to parse
        input: String,
    },

    /// The tokio runtime for the async workload could not be created
    #[error("Failed to create tokio runtime: {message}")]
    Runtime {
        /// Description of the runtime error
        message: String,
    },

    /// A workload task panicked or was cancelled before reporting
    #[error("Workload task failed: {message}")]
    TaskFailed {
        /// Description of the join failure
        message: String,
    },

    /// I/O error while reading commands or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io {
            message: error.to_string(),
        }
    }
}

impl AppError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        AppError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl ToString) -> Self {
        AppError::Runtime {
            message: message.to_string(),
        }
    }

    /// Create a TaskFailed error
    pub fn task_failed(message: impl ToString) -> Self {
        AppError::TaskFailed {
            message: message.to_string(),
        }
    }
}
