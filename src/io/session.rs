//! Interactive command session
//!
//! This module provides the `Session` struct, a sequential command loop over
//! any `BufRead` input and `Write` output that drives a [`BankClient`].
//!
//! # Protocol
//!
//! - `balance` prints the current balance
//! - `deposit` / `withdrawal` prompt for an amount on the next line, apply it,
//!   and print the resulting balance
//! - `exit` prints a farewell and ends the session
//! - anything else prints `unknown command` and the help line
//!
//! An amount that is not an integer aborts the command without touching the
//! account. End of input ends the session quietly.

use super::command::{parse_amount, Command};
use crate::core::BankClient;
use crate::types::{Amount, AppError};
use std::io::{BufRead, Write};

pub const SEPARATOR: &str = "-----------------------------";
pub const HELP: &str = "You can use commands: balance, deposit, withdrawal, exit";
pub const FAREWELL: &str = "program terminated";
pub const UNKNOWN_COMMAND: &str = "unknown command";
pub const RETRY_COMMAND: &str = "enter the command again";
pub const DEPOSIT_PROMPT: &str = "Enter deposit amount";
pub const WITHDRAWAL_PROMPT: &str = "Enter withdrawal amount";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `exit`
    Exit,
    /// The input stream ran out
    EndOfInput,
}

/// Sequential command loop over a bank client
pub struct Session<'a, C: BankClient + ?Sized, R, W> {
    client: &'a C,
    input: R,
    output: W,
}

impl<'a, C, R, W> Session<'a, C, R, W>
where
    C: BankClient + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(client: &'a C, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    /// Run the loop until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output` end the loop with an error.
    /// Invalid amounts and rejected withdrawals are reported to the user and
    /// the loop continues.
    pub fn run(&mut self) -> Result<SessionEnd, AppError> {
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "{HELP}")?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(SessionEnd::EndOfInput);
            };

            let command = Command::parse(&line);
            tracing::debug!(?command, "session command");

            match command {
                Command::Balance => self.print_balance()?,
                Command::Exit => {
                    writeln!(self.output, "{FAREWELL}")?;
                    self.output.flush()?;
                    return Ok(SessionEnd::Exit);
                }
                Command::Deposit => {
                    writeln!(self.output, "{DEPOSIT_PROMPT}")?;
                    if let Some(amount) = self.read_amount()? {
                        self.client.deposit(amount);
                        self.print_balance()?;
                    }
                }
                Command::Withdrawal => {
                    writeln!(self.output, "{WITHDRAWAL_PROMPT}")?;
                    if let Some(amount) = self.read_amount()? {
                        if let Err(e) = self.client.withdraw(amount) {
                            writeln!(self.output, "{e}")?;
                        }
                        self.print_balance()?;
                    }
                }
                Command::Unknown(_) => {
                    writeln!(self.output, "{UNKNOWN_COMMAND}")?;
                    writeln!(self.output, "{HELP}")?;
                }
            }

            self.output.flush()?;
        }
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Read the amount line; `None` means the command was aborted
    ///
    /// A missing line counts as an invalid amount.
    fn read_amount(&mut self) -> Result<Option<Amount>, AppError> {
        let line = self.read_line()?.unwrap_or_default();

        match parse_amount(&line) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                tracing::debug!(error = ?e, "amount rejected");
                writeln!(self.output, "{e}")?;
                writeln!(self.output, "{RETRY_COMMAND}")?;
                Ok(None)
            }
        }
    }

    fn print_balance(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Current balance: {}", self.client.balance())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Account;
    use std::io::Cursor;

    fn run_script(account: &Account, script: &str) -> (SessionEnd, String) {
        let mut session = Session::new(account, Cursor::new(script.as_bytes()), Vec::new());
        let end = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (end, output)
    }

    fn body(output: &str) -> Vec<&str> {
        // Skip the separator and help banner
        output.lines().skip(2).collect()
    }

    #[test]
    fn test_banner_is_printed_first() {
        let account = Account::new();
        let (_, output) = run_script(&account, "");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![SEPARATOR, HELP]);
    }

    #[test]
    fn test_exit_ends_session() {
        let account = Account::new();
        let (end, output) = run_script(&account, "exit\nbalance\n");

        assert_eq!(end, SessionEnd::Exit);
        assert_eq!(body(&output), vec![FAREWELL]);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let account = Account::new();
        let (end, output) = run_script(&account, "balance\n");

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(body(&output), vec!["Current balance: 0"]);
    }

    #[test]
    fn test_deposit_then_withdrawals() {
        let account = Account::new();
        let script = "deposit\n50\nwithdrawal\n30\nwithdrawal\n30\n";
        let (_, output) = run_script(&account, script);

        assert_eq!(
            body(&output),
            vec![
                DEPOSIT_PROMPT,
                "Current balance: 50",
                WITHDRAWAL_PROMPT,
                "Current balance: 20",
                WITHDRAWAL_PROMPT,
                "insufficient balance for withdrawal, operation cannot be performed (balance 20, requested 30)",
                "Current balance: 20",
            ]
        );
        assert_eq!(account.balance(), 20);
    }

    #[test]
    fn test_invalid_amount_does_not_touch_account() {
        let account = Account::new();
        account.deposit(10);
        let (_, output) = run_script(&account, "withdrawal\nten\ndeposit\n\nbalance\n");

        assert_eq!(
            body(&output),
            vec![
                WITHDRAWAL_PROMPT,
                "invalid amount",
                RETRY_COMMAND,
                DEPOSIT_PROMPT,
                "invalid amount",
                RETRY_COMMAND,
                "Current balance: 10",
            ]
        );
        assert_eq!(account.balance(), 10);
    }

    #[test]
    fn test_missing_amount_at_end_of_input() {
        let account = Account::new();
        let (end, output) = run_script(&account, "deposit\n");

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(
            body(&output),
            vec![DEPOSIT_PROMPT, "invalid amount", RETRY_COMMAND]
        );
    }

    #[test]
    fn test_unknown_command_reprompts() {
        let account = Account::new();
        let (_, output) = run_script(&account, "transfer\n");

        assert_eq!(body(&output), vec![UNKNOWN_COMMAND, HELP]);
    }

    #[test]
    fn test_session_over_trait_object() {
        let account = Account::new();
        let client: &dyn BankClient = &account;
        let mut session = Session::new(client, Cursor::new("deposit\n5\n"), Vec::new());

        assert_eq!(session.run().unwrap(), SessionEnd::EndOfInput);
        assert_eq!(account.balance(), 5);
    }

    #[test]
    fn test_output_failure_is_reported() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let account = Account::new();
        let mut session = Session::new(&account, Cursor::new("balance\n"), FailingWriter);

        let err = session.run().unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
