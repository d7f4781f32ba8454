//! Workload strategy module
//!
//! This module defines the Strategy pattern for running the startup workload:
//! a fixed batch of concurrent deposits and withdrawals followed by a join
//! barrier. Different execution vehicles (OS threads, tokio tasks) can be
//! selected at runtime.

use crate::cli::StrategyType;
use crate::core::BankClient;
use crate::types::AppError;
use std::sync::Arc;

pub mod r#async;
pub mod sync;
pub mod workload;

pub use self::r#async::AsyncWorkloadStrategy;
pub use sync::SyncWorkloadStrategy;
pub use workload::{WorkloadConfig, WorkloadPlan, WorkloadReport};

/// Workload strategy trait
///
/// Each strategy must launch every planned operation as an independent
/// concurrent task, wait for all of them, and only then build the report.
pub trait WorkloadStrategy: Send + Sync {
    /// Run `plan` against `client`
    ///
    /// # Returns
    ///
    /// * `Ok(WorkloadReport)` once every operation has completed; rejected
    ///   withdrawals are recorded in the report, not returned as errors
    /// * `Err(AppError)` if the execution vehicle itself failed
    fn run(
        &self,
        client: Arc<dyn BankClient>,
        plan: WorkloadPlan,
    ) -> Result<WorkloadReport, AppError>;
}

/// Create a workload strategy based on the specified strategy type
///
/// `config` is only consulted by the async strategy (for its worker thread
/// count); `None` means `WorkloadConfig::default()`.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<WorkloadConfig>,
) -> Box<dyn WorkloadStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncWorkloadStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncWorkloadStrategy::new(config))
        }
    }
}
