//! Asynchronous workload strategy
//!
//! This module provides a tokio-based implementation of the WorkloadStrategy
//! trait. Every planned operation becomes its own task on a multi-threaded
//! runtime.
//!
//! # Architecture
//!
//! ```text
//! AsyncWorkloadStrategy
//!     ├── WorkloadConfig (worker_threads)
//!     ├── tokio multi-threaded runtime
//!     └── Arc<dyn BankClient> cloned into each spawned task
//! ```
//!
//! The account lock is a synchronous `parking_lot::RwLock` held only for
//! integer arithmetic and never across an `.await`, so calling it from tokio
//! worker threads does not stall the runtime.

use crate::core::BankClient;
use crate::strategy::workload::{execute, WorkloadConfig, WorkloadPlan, WorkloadReport};
use crate::strategy::WorkloadStrategy;
use crate::types::AppError;
use futures::future::join_all;
use std::sync::Arc;

/// Asynchronous workload strategy
///
/// Spawns one tokio task per planned operation, then awaits all of them with
/// `join_all` before reading the final balance.
#[derive(Debug, Clone)]
pub struct AsyncWorkloadStrategy {
    config: WorkloadConfig,
}

impl AsyncWorkloadStrategy {
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }
}

impl WorkloadStrategy for AsyncWorkloadStrategy {
    /// Run the plan on a fresh multi-threaded runtime
    ///
    /// # Errors
    ///
    /// * `AppError::Runtime` if the runtime cannot be built
    /// * `AppError::TaskFailed` if any task panicked; every other task has
    ///   still been awaited when this is returned
    fn run(
        &self,
        client: Arc<dyn BankClient>,
        plan: WorkloadPlan,
    ) -> Result<WorkloadReport, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(AppError::runtime)?;

        runtime.block_on(async {
            let initial_balance = client.balance();

            let tasks: Vec<_> = plan
                .into_operations()
                .into_iter()
                .map(|operation| {
                    let client = Arc::clone(&client);
                    tokio::spawn(async move { execute(client.as_ref(), operation) })
                })
                .collect();

            // Join barrier: nothing below runs until every task has finished
            let joined = join_all(tasks).await;

            let mut outcomes = Vec::with_capacity(joined.len());
            for result in joined {
                match result {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => {
                        tracing::error!("Task panicked: {:?}", e);
                        return Err(AppError::task_failed(e));
                    }
                }
            }

            Ok(WorkloadReport::new(
                initial_balance,
                outcomes,
                client.balance(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Account;
    use crate::types::Operation;

    #[test]
    fn test_async_strategy_runs_every_operation() {
        let account = Arc::new(Account::new());
        let config = WorkloadConfig::default();
        let plan = WorkloadPlan::from_seed(&config, Some(3));

        let report = AsyncWorkloadStrategy::new(config)
            .run(account.clone(), plan)
            .unwrap();

        assert_eq!(report.outcomes.len(), 15);
        assert!(report.is_conserved());
        assert!(report.final_balance >= 0);
        assert_eq!(report.final_balance, account.balance());
    }

    #[test]
    fn test_async_strategy_two_concurrent_deposits() {
        let account = Arc::new(Account::new());
        let plan = WorkloadPlan::new(vec![Operation::Deposit(100), Operation::Deposit(100)]);

        let report = AsyncWorkloadStrategy::new(WorkloadConfig::new(1, 1, 1, 2))
            .run(account.clone(), plan)
            .unwrap();

        assert_eq!(report.final_balance, 200);
    }

    #[test]
    fn test_async_strategy_single_worker_thread() {
        let account = Arc::new(Account::new());
        account.deposit(1_000);
        let plan = WorkloadPlan::new(vec![Operation::Withdrawal(100); 20]);

        let report = AsyncWorkloadStrategy::new(WorkloadConfig::new(1, 1, 1, 1))
            .run(account.clone(), plan)
            .unwrap();

        assert_eq!(report.accepted_withdrawals().len(), 10);
        assert_eq!(report.rejected_withdrawals().len(), 10);
        assert_eq!(report.final_balance, 0);
    }

    #[test]
    fn test_async_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AsyncWorkloadStrategy>();
    }
}
