use crate::strategy::WorkloadConfig;
use crate::types::Amount;
use clap::{Parser, ValueEnum};

/// Run a concurrent deposit/withdrawal workload, then an interactive session
#[derive(Parser, Debug)]
#[command(name = "bank-client")]
#[command(about = "Concurrent single-account bank client with an interactive session", long_about = None)]
pub struct CliArgs {
    /// Execution strategy for the startup workload
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Workload strategy: 'sync' for OS threads or 'async' for tokio tasks"
    )]
    pub strategy: StrategyType,

    /// Number of concurrent deposit tasks
    #[arg(
        long = "depositors",
        value_name = "COUNT",
        help = "Number of concurrent deposit tasks (default: 10)"
    )]
    pub depositors: Option<usize>,

    /// Number of concurrent withdrawal tasks
    #[arg(
        long = "withdrawers",
        value_name = "COUNT",
        help = "Number of concurrent withdrawal tasks (default: 5)"
    )]
    pub withdrawers: Option<usize>,

    /// Exclusive upper bound for random amounts
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Random amounts are drawn from [0, AMOUNT) (default: 100000)"
    )]
    pub max_amount: Option<Amount>,

    /// Worker threads for the tokio runtime (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Tokio worker threads for the async strategy (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Seed for the random workload plan
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the random amounts for a reproducible workload (default: OS entropy)"
    )]
    pub seed: Option<u64>,
}

/// Available workload strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a WorkloadConfig from CLI arguments
    ///
    /// Flags that were not given take their default; zero values are replaced
    /// by defaults with a warning (see [`WorkloadConfig::new`]).
    pub fn to_workload_config(&self) -> WorkloadConfig {
        if self.depositors.is_some()
            || self.withdrawers.is_some()
            || self.max_amount.is_some()
            || self.worker_threads.is_some()
        {
            let default = WorkloadConfig::default();
            WorkloadConfig::new(
                self.depositors.unwrap_or(default.depositors),
                self.withdrawers.unwrap_or(default.withdrawers),
                self.max_amount.unwrap_or(default.max_amount),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            WorkloadConfig::default()
        }
    }
}
