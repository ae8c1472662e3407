use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::ledger::{self, parse_amount, parse_date, Ledger};
use crate::models::Expense;
use crate::reports;
use crate::settings::resolve_ledger_path;

const MENU: &str = "\
1) Add an expense
2) View expenses
3) Monthly report
4) Annual report
5) Save ledger
6) Exit";

pub fn run(file: Option<&str>) -> Result<()> {
    let path = resolve_ledger_path(file);
    let mut ledger = startup_load(&path);

    loop {
        println!();
        println!("{}", "Expense Tracker".bold());
        println!("{MENU}");
        let Some(choice) = prompt("Choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => add_expense(&mut ledger),
            "2" => println!("{}", super::list::format_entries(&ledger)),
            "3" => monthly_report(&ledger),
            "4" => {
                let summary = reports::summarize(ledger.entries(), None);
                println!("{}", super::report::format_summary("Annual Report", &summary));
            }
            "5" => {
                save_ledger(&mut ledger, &path);
            }
            "6" => {
                if exit_session(&mut ledger, &path) {
                    break;
                }
            }
            _ => println!("Invalid choice."),
        }
    }
    println!("Goodbye.");
    Ok(())
}

fn startup_load(path: &Path) -> Ledger {
    if !path.exists() {
        println!("No ledger at {} (starting empty)", path.display());
        return Ledger::new();
    }
    match ledger::load(path) {
        Ok((loaded, summary)) => {
            if summary.skipped > 0 {
                println!(
                    "Loaded {} expenses from {} ({} lines skipped)",
                    summary.loaded,
                    path.display(),
                    summary.skipped
                );
            } else {
                println!("Loaded {} expenses from {}", summary.loaded, path.display());
            }
            for warning in &summary.warnings {
                println!(
                    "{}",
                    format!("line {}: {}", warning.line, warning.error).yellow()
                );
            }
            loaded
        }
        Err(e) => {
            println!(
                "{}",
                format!("Could not read {}: {e}", path.display()).yellow()
            );
            Ledger::new()
        }
    }
}

/// Read one trimmed line from stdin. None on EOF, which ends the session.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn add_expense(ledger: &mut Ledger) {
    let Some(raw_amount) = prompt("Amount: $") else {
        return;
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let Some(category) = prompt("Category: ") else {
        return;
    };
    if category.is_empty() {
        println!("Category must not be empty.");
        return;
    }

    let Some(description) = prompt("Description: ") else {
        return;
    };

    let Some(raw_date) = prompt("Date (YYYY-MM-DD, blank for today): ") else {
        return;
    };
    let date = if raw_date.is_empty() {
        chrono::Local::now().date_naive()
    } else {
        match parse_date(&raw_date) {
            Ok(date) => date,
            Err(e) => {
                println!("{e}");
                return;
            }
        }
    };

    let expense = Expense {
        amount,
        category,
        description,
        date,
    };
    println!("Added {expense}");
    ledger.append(expense);
}

fn monthly_report(ledger: &Ledger) {
    let Some(raw) = prompt("Month (01-12): ") else {
        return;
    };
    match reports::parse_month(&raw) {
        Ok(m) => {
            let summary = reports::summarize(ledger.entries(), Some(m));
            println!(
                "{}",
                super::report::format_summary(&super::report::month_title(m), &summary)
            );
        }
        Err(e) => println!("{e}"),
    }
}

/// Write the ledger out. A failed save keeps the in-memory entries and the
/// session running.
fn save_ledger(ledger: &mut Ledger, path: &Path) -> bool {
    match ledger::save(ledger, path) {
        Ok(()) => {
            ledger.mark_saved();
            println!("Saved {} expenses to {}", ledger.len(), path.display());
            true
        }
        Err(e) => {
            println!("{}", format!("Save failed: {e}").yellow());
            false
        }
    }
}

/// Returns true when the session should end. Unsaved entries get one save
/// offer; declining discards them.
fn exit_session(ledger: &mut Ledger, path: &Path) -> bool {
    if !ledger.is_dirty() {
        return true;
    }
    match prompt("Save before exiting? (y/N): ") {
        Some(answer) if answer.eq_ignore_ascii_case("y") => save_ledger(ledger, path),
        _ => true,
    }
}
