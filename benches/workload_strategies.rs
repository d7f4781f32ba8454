//! Benchmark suite for the account and the workload strategies
//!
//! Compares thread-based and tokio-based workload execution, and measures
//! uncontended account operations, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_client::cli::StrategyType;
use bank_client::core::Account;
use bank_client::strategy::{create_strategy, WorkloadConfig, WorkloadPlan};
use std::sync::Arc;

fn main() {
    divan::main();
}

/// Run a seeded workload of `tasks` deposits and `tasks` withdrawals
fn run_workload(strategy_type: StrategyType, tasks: usize) {
    let config = WorkloadConfig::new(tasks, tasks, 100_000, num_cpus::get());
    let plan = WorkloadPlan::from_seed(&config, Some(42));
    let strategy = create_strategy(strategy_type, Some(config));
    let account = Arc::new(Account::new());

    strategy.run(account.clone(), plan).expect("Workload failed");
}

/// Benchmark the sync strategy with the default-sized workload
#[divan::bench]
fn sync_strategy_small() {
    run_workload(StrategyType::Sync, 10);
}

/// Benchmark the async strategy with the default-sized workload
#[divan::bench]
fn async_strategy_small() {
    run_workload(StrategyType::Async, 10);
}

/// Benchmark the sync strategy with 1,000 tasks of each kind
#[divan::bench]
fn sync_strategy_large() {
    run_workload(StrategyType::Sync, 1_000);
}

/// Benchmark the async strategy with 1,000 tasks of each kind
#[divan::bench]
fn async_strategy_large() {
    run_workload(StrategyType::Async, 1_000);
}

#[divan::bench]
fn uncontended_deposit_withdraw(bencher: divan::Bencher) {
    let account = Account::new();
    bencher.bench_local(|| {
        account.deposit(divan::black_box(10));
        account.withdraw(divan::black_box(10))
    });
}

#[divan::bench]
fn uncontended_balance(bencher: divan::Bencher) {
    let account = Account::new();
    account.deposit(10);
    bencher.bench_local(|| account.balance());
}
