//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `operation`: Amounts, planned operations and their outcomes
//! - `error`: Error types for the account and the surrounding layers

pub mod error;
pub mod operation;

pub use error::{AppError, BankError};
pub use operation::{Amount, Operation, OperationOutcome};
