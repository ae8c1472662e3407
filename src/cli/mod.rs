pub mod add;
pub mod init;
pub mod list;
pub mod menu;
pub mod report;
pub mod save;
pub mod status;

use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::ledger::{self, Ledger};

#[derive(Parser)]
#[command(name = "tally", about = "Plain-file expense tracker for the terminal.")]
pub struct Cli {
    /// Ledger file to use for this invocation (overrides settings)
    #[arg(long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record one expense and save the ledger.
    Add {
        /// Amount spent, e.g. 12.50
        amount: String,
        /// Category label, e.g. Food
        #[arg(long)]
        category: String,
        /// What the money went to
        #[arg(long, default_value = "")]
        description: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List every recorded expense.
    List,
    /// Category summaries.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Rewrite the ledger file in canonical form.
    Save,
    /// Show ledger location, entry count, and totals.
    Status,
    /// Record the ledger location in settings.
    Init {
        /// Path for the ledger file (default: expenses.csv)
        #[arg(long)]
        ledger: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Expenses for one calendar month, any year.
    Month {
        /// Month: 01-12
        month: String,
    },
    /// All expenses on record.
    Year,
}

/// Read the ledger for a one-shot command, reporting load problems to stderr
/// without failing: a missing or unreadable file starts an empty session.
pub(crate) fn open_ledger(path: &Path) -> Ledger {
    if !path.exists() {
        eprintln!("No ledger at {} (starting empty)", path.display());
        return Ledger::new();
    }
    match ledger::load(path) {
        Ok((loaded, summary)) => {
            for warning in &summary.warnings {
                eprintln!(
                    "{}",
                    format!("line {}: {}", warning.line, warning.error).yellow()
                );
            }
            loaded
        }
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not read {}: {e}", path.display()).yellow()
            );
            Ledger::new()
        }
    }
}
