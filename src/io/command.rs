//! Command and amount parsing for the interactive session
//!
//! Each command is a single token on its own line; amounts follow on the next
//! line when a command needs one.

use crate::types::{Amount, AppError};

/// A command token entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current balance
    Balance,
    /// Prompt for an amount and deposit it
    Deposit,
    /// Prompt for an amount and try to withdraw it
    Withdrawal,
    /// End the session
    Exit,
    /// Anything else, kept verbatim for diagnostics
    Unknown(String),
}

impl Command {
    /// Parse a command line
    ///
    /// Surrounding whitespace is ignored; matching is otherwise exact and
    /// case-sensitive.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "balance" => Command::Balance,
            "deposit" => Command::Deposit,
            "withdrawal" => Command::Withdrawal,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Parse an amount line as a base-10 integer
///
/// A leading sign is accepted; the sign of the amount is not validated.
pub fn parse_amount(line: &str) -> Result<Amount, AppError> {
    let trimmed = line.trim();
    trimmed
        .parse::<Amount>()
        .map_err(|_| AppError::invalid_amount(trimmed))
}
