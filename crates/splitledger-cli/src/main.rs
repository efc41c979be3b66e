//! `splitledger`: load a group snapshot, print totals and a settlement plan.

mod cli;
mod logging;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use splitledger_ingress::{ExpenseLedger, GroupSummary, LedgerSnapshot};
use splitledger_types::Currency;

use crate::cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging().init();

    let summary = summarize(&cli)?;
    let report = match cli.format {
        OutputFormat::Text => summary.render_text(),
        OutputFormat::Json => summary.to_json().context("Failed to encode summary")?,
    };
    println!("{report}");
    Ok(())
}

fn summarize(cli: &Cli) -> Result<GroupSummary> {
    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let mut snapshot = LedgerSnapshot::from_json(&raw)
        .with_context(|| format!("Failed to parse snapshot {}", cli.input.display()))?;

    if let Some(code) = &cli.currency {
        if Currency::find(code).is_none() {
            tracing::warn!(currency = %code, fallback = %Currency::default(), "Unknown currency code");
        }
        snapshot.config.currency.clone_from(code);
    }

    tracing::info!(input = %cli.input.display(), "Loading ledger");
    let ledger = ExpenseLedger::from_snapshot(snapshot).context("Snapshot rejected")?;
    ledger.export().context("Nothing to summarize")
}
