//! Core business logic module
//!
//! This module contains the account primitive:
//! - `traits` - The `BankClient` call interface
//! - `account` - The lock-guarded single-balance `Account`

pub mod account;
pub mod traits;

pub use account::Account;
pub use traits::BankClient;
