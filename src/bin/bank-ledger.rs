use std::io;

use anyhow::{Context, Result};
use bank_ledger::{
    ledger::{Ledger, in_memory_ledger::InMemoryLedger},
    shell::{Shell, summary::print_accounts},
};
use clap::Parser;
use tracing::Level;

/// Interactive in-memory bank account ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive in-memory bank account ledger", long_about = None)]
struct Args {
    /// Maximum level of diagnostic logs, written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: Level,

    /// Print a CSV summary of all accounts to stdout on exit
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the menu, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut ledger = InMemoryLedger::new();
    let mut stdout = io::stdout();

    let shell = Shell {
        input: io::stdin().lock(),
        output: &mut stdout,
        ledger: &mut ledger,
    };
    shell.run()?;

    if args.summary {
        print_accounts(&mut stdout, ledger.accounts().map(|acc| acc.describe()))
            .context("Failed to print account summary")?;
    }
    Ok(())
}
