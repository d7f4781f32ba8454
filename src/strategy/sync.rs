//! Synchronous workload strategy
//!
//! This module provides a thread-based implementation of the WorkloadStrategy
//! trait. Every planned operation runs on its own OS thread.
//!
//! # Design
//!
//! Threads are spawned inside `std::thread::scope`, so they borrow the client
//! directly instead of cloning the `Arc`. The scope is the join barrier: the
//! report is built only after every thread has been joined.

use crate::core::BankClient;
use crate::strategy::workload::{execute, WorkloadPlan, WorkloadReport};
use crate::strategy::WorkloadStrategy;
use crate::types::AppError;
use std::sync::Arc;
use std::thread;

/// Synchronous workload strategy
///
/// # Examples
///
/// ```
/// use bank_client::core::Account;
/// use bank_client::strategy::{SyncWorkloadStrategy, WorkloadPlan, WorkloadStrategy};
/// use bank_client::types::Operation;
/// use std::sync::Arc;
///
/// let account = Arc::new(Account::new());
/// let plan = WorkloadPlan::new(vec![Operation::Deposit(100), Operation::Deposit(100)]);
///
/// let report = SyncWorkloadStrategy.run(account.clone(), plan).unwrap();
/// assert_eq!(report.final_balance, 200);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncWorkloadStrategy;

impl WorkloadStrategy for SyncWorkloadStrategy {
    fn run(
        &self,
        client: Arc<dyn BankClient>,
        plan: WorkloadPlan,
    ) -> Result<WorkloadReport, AppError> {
        let client: &dyn BankClient = client.as_ref();
        let initial_balance = client.balance();

        let joined: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = plan
                .into_operations()
                .into_iter()
                .map(|operation| scope.spawn(move || execute(client, operation)))
                .collect();

            // Join every handle before inspecting results so no panicked
            // thread is left for the scope to re-raise
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut outcomes = Vec::with_capacity(joined.len());
        for result in joined {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(_) => {
                    tracing::error!("workload thread panicked");
                    return Err(AppError::task_failed("workload thread panicked"));
                }
            }
        }

        Ok(WorkloadReport::new(
            initial_balance,
            outcomes,
            client.balance(),
        ))
    }
}
