//! Bank Client CLI
//!
//! Runs a fixed concurrent workload against a single account, then hands the
//! same account to an interactive command session.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --strategy sync
//! cargo run -- --strategy async --worker-threads 4 --seed 42
//! RUST_LOG=debug cargo run -- --depositors 100 --withdrawers 50
//! ```
//!
//! # Session Commands
//!
//! - `balance`: print the current balance
//! - `deposit`: prompt for an amount and deposit it
//! - `withdrawal`: prompt for an amount and withdraw it if the balance covers it
//! - `exit`: leave the program
//!
//! # Exit Codes
//!
//! - 0: `exit` was entered or input ended
//! - 1: Error (runtime could not start, workload task failed, terminal I/O failed)

use bank_client::cli::{self, CliArgs};
use bank_client::core::Account;
use bank_client::io::Session;
use bank_client::strategy::{self, WorkloadPlan};
use bank_client::types::AppError;
use std::io::{self, Write};
use std::process;
use std::sync::Arc;

fn main() {
    cli::init_logging();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = run(args) {
        tracing::error!(error = %e, "fatal error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let config = args.to_workload_config();
    let plan = WorkloadPlan::from_seed(&config, args.seed);
    let strategy = strategy::create_strategy(args.strategy, Some(config));

    // One account for the whole process, injected into every consumer
    let account = Arc::new(Account::new());

    let report = strategy.run(account.clone(), plan)?;
    tracing::info!(
        final_balance = report.final_balance,
        accepted_withdrawals = report.accepted_withdrawals().len(),
        rejected_withdrawals = report.rejected_withdrawals().len(),
        "startup workload finished"
    );

    let mut output = io::stdout().lock();
    for outcome in report.rejected_withdrawals() {
        if let Err(e) = &outcome.result {
            writeln!(output, "{}", e)?;
        }
    }

    let mut session = Session::new(account.as_ref(), io::stdin().lock(), output);
    let end = session.run()?;
    tracing::debug!(?end, "session ended");

    Ok(())
}
