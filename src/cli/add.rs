use colored::Colorize;

use crate::error::{Result, TallyError};
use crate::fmt::money;
use crate::ledger::{self, parse_amount, parse_date};
use crate::models::Expense;
use crate::settings::resolve_ledger_path;

pub fn run(
    file: Option<&str>,
    amount: &str,
    category: &str,
    description: &str,
    date: Option<&str>,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    if category.trim().is_empty() {
        return Err(TallyError::Other("Category must not be empty".to_string()));
    }

    let path = resolve_ledger_path(file);
    let mut ledger = super::open_ledger(&path);
    ledger.append(Expense {
        amount,
        category: category.trim().to_string(),
        description: description.trim().to_string(),
        date,
    });
    ledger::save(&ledger, &path)?;

    println!(
        "Recorded {} in {} on {} ({} entries)",
        money(amount).green(),
        category.trim(),
        date,
        ledger.len()
    );
    Ok(())
}
