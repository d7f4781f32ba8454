//! Bank Client Library
//! # Overview
//!
//! This library provides a single-balance account that is safe under concurrent
//! deposits and withdrawals, a concurrent workload driver, and an interactive
//! command session over the same account.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Amounts, operations and error types
//! - [`core`] - The account primitive:
//!   - [`core::traits`] - The `BankClient` call interface
//!   - [`core::account`] - Lock-guarded balance with linearizable mutations
//! - [`strategy`] - Startup workload run on OS threads or tokio tasks
//! - [`io`] - Interactive command session
//! - [`cli`] - CLI arguments parsing and logging setup
//!
//! # Account Guarantees
//!
//! - **Deposit**: always succeeds; concurrent deposits never lose an update
//! - **Withdraw**: checks and subtracts atomically; fails with
//!   `InsufficientFunds` and leaves the balance unchanged if it would go negative
//! - **Balance**: a consistent snapshot, never a half-applied mutation

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{Account, BankClient};
pub use types::{Amount, AppError, BankError, Operation, OperationOutcome};
