//! Operation-related types for the bank client
//!
//! This module defines the currency amount type and the planned operations
//! that the startup workload launches against the account.

use super::error::BankError;

/// Currency amount in whole units
///
/// Signed so that the session can pass through whatever integer the user typed;
/// amounts are not validated for sign.
pub type Amount = i64;

/// A single planned operation against the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Unconditionally credit the amount
    Deposit(Amount),

    /// Debit the amount if the balance covers it
    Withdrawal(Amount),
}

impl Operation {
    /// The amount carried by this operation
    pub fn amount(&self) -> Amount {
        match self {
            Operation::Deposit(amount) | Operation::Withdrawal(amount) => *amount,
        }
    }

    pub fn is_deposit(&self) -> bool {
        matches!(self, Operation::Deposit(_))
    }
}

/// Outcome of executing one planned operation
///
/// Contains the operation that was executed and the result returned by the account.
/// Deposits always carry `Ok(())`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    /// The operation that was executed
    pub operation: Operation,

    /// The result of executing it
    pub result: Result<(), BankError>,
}

impl OperationOutcome {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(Operation::Deposit(50), 50, true)]
    #[case::withdrawal(Operation::Withdrawal(30), 30, false)]
    #[case::negative_passes_through(Operation::Deposit(-5), -5, true)]
    fn test_operation_accessors(
        #[case] operation: Operation,
        #[case] amount: Amount,
        #[case] is_deposit: bool,
    ) {
        assert_eq!(operation.amount(), amount);
        assert_eq!(operation.is_deposit(), is_deposit);
    }

    #[test]
    fn test_outcome_acceptance() {
        let accepted = OperationOutcome {
            operation: Operation::Withdrawal(10),
            result: Ok(()),
        };
        let rejected = OperationOutcome {
            operation: Operation::Withdrawal(10),
            result: Err(BankError::insufficient_funds(0, 10)),
        };

        assert!(accepted.is_accepted());
        assert!(!rejected.is_accepted());
    }
}
