//! Workload configuration, planning and reporting
//!
//! The startup workload is a fixed batch of independent operations (by default
//! 10 deposits and 5 withdrawals of random amounts in `[0, 100000)`) launched
//! concurrently against one account. This module holds the pieces shared by
//! both execution strategies:
//!
//! - [`WorkloadConfig`] - how many tasks of each kind and how large the amounts are
//! - [`WorkloadPlan`] - the concrete operations, drawn from a seedable RNG
//! - [`WorkloadReport`] - every outcome plus the balance after the join barrier

use crate::core::BankClient;
use crate::types::{Amount, Operation, OperationOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the startup workload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of concurrent deposit tasks
    pub depositors: usize,
    /// Number of concurrent withdrawal tasks
    pub withdrawers: usize,
    /// Exclusive upper bound for random amounts
    pub max_amount: Amount,
    /// Worker threads for the tokio runtime (async strategy only)
    pub worker_threads: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            depositors: 10,
            withdrawers: 5,
            max_amount: 100_000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl WorkloadConfig {
    /// Create a new WorkloadConfig with custom values
    ///
    /// Zero task counts and non-positive amount bounds fall back to their
    /// defaults with a warning.
    pub fn new(
        depositors: usize,
        withdrawers: usize,
        max_amount: Amount,
        worker_threads: usize,
    ) -> Self {
        let default = Self::default();

        let depositors = if depositors == 0 {
            tracing::warn!(
                "Invalid depositors ({}), using default ({})",
                depositors,
                default.depositors
            );
            default.depositors
        } else {
            depositors
        };

        let withdrawers = if withdrawers == 0 {
            tracing::warn!(
                "Invalid withdrawers ({}), using default ({})",
                withdrawers,
                default.withdrawers
            );
            default.withdrawers
        } else {
            withdrawers
        };

        let max_amount = if max_amount <= 0 {
            tracing::warn!(
                "Invalid max_amount ({}), using default ({})",
                max_amount,
                default.max_amount
            );
            default.max_amount
        } else {
            max_amount
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            depositors,
            withdrawers,
            max_amount,
            worker_threads,
        }
    }
}

/// The concrete operations a workload will launch
///
/// Deposits come first in launch order, then withdrawals. Launch order does
/// not constrain the order the account applies them in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadPlan {
    operations: Vec<Operation>,
}

impl WorkloadPlan {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Draw a plan from `rng`, with every amount in `[0, config.max_amount)`
    ///
    /// A non-positive bound (possible when the config is built by struct
    /// literal rather than [`WorkloadConfig::new`]) is treated as 1, so every
    /// amount is then zero.
    pub fn random<R: Rng + ?Sized>(config: &WorkloadConfig, rng: &mut R) -> Self {
        let max_amount = config.max_amount.max(1);
        let mut operations = Vec::with_capacity(config.depositors + config.withdrawers);

        for _ in 0..config.depositors {
            operations.push(Operation::Deposit(rng.gen_range(0..max_amount)));
        }
        for _ in 0..config.withdrawers {
            operations.push(Operation::Withdrawal(rng.gen_range(0..max_amount)));
        }

        Self { operations }
    }

    /// Draw a plan from a seeded RNG, or from OS entropy when `seed` is `None`
    pub fn from_seed(config: &WorkloadConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::random(config, &mut rng)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

/// Result of running a workload to completion
///
/// Built only after every task has been joined, so `final_balance` reflects
/// all planned operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadReport {
    /// Balance read before any task was launched
    pub initial_balance: Amount,
    /// One outcome per planned operation, in completion-collection order
    pub outcomes: Vec<OperationOutcome>,
    /// Balance read after the join barrier
    pub final_balance: Amount,
}

impl WorkloadReport {
    pub fn new(
        initial_balance: Amount,
        outcomes: Vec<OperationOutcome>,
        final_balance: Amount,
    ) -> Self {
        Self {
            initial_balance,
            outcomes,
            final_balance,
        }
    }

    /// Sum of all deposit amounts
    pub fn deposited_total(&self) -> Amount {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.operation.is_deposit())
            .map(|outcome| outcome.operation.amount())
            .sum()
    }

    /// Amounts of the withdrawals the account accepted
    pub fn accepted_withdrawals(&self) -> Vec<Amount> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.operation.is_deposit() && outcome.is_accepted())
            .map(|outcome| outcome.operation.amount())
            .collect()
    }

    /// Outcomes of the withdrawals the account rejected
    pub fn rejected_withdrawals(&self) -> Vec<&OperationOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_accepted())
            .collect()
    }

    pub fn withdrawn_total(&self) -> Amount {
        self.accepted_withdrawals().iter().sum()
    }

    /// Whether `final = initial + deposits - accepted withdrawals`
    pub fn is_conserved(&self) -> bool {
        self.initial_balance + self.deposited_total() - self.withdrawn_total()
            == self.final_balance
    }
}

/// Execute one planned operation against `client`
pub fn execute<C: BankClient + ?Sized>(client: &C, operation: Operation) -> OperationOutcome {
    let result = match operation {
        Operation::Deposit(amount) => {
            client.deposit(amount);
            Ok(())
        }
        Operation::Withdrawal(amount) => client.withdraw(amount),
    };

    tracing::debug!(?operation, ?result, "workload operation finished");

    OperationOutcome { operation, result }
}
