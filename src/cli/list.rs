use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::ledger::Ledger;
use crate::settings::resolve_ledger_path;

pub fn run(file: Option<&str>) -> Result<()> {
    let path = resolve_ledger_path(file);
    let ledger = super::open_ledger(&path);
    println!("{}", format_entries(&ledger));
    Ok(())
}

pub fn format_entries(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Category", "Description", "Amount"]);
    let mut total = 0.0f64;
    for expense in ledger.entries() {
        table.add_row(vec![
            Cell::new(expense.date),
            Cell::new(&expense.category),
            Cell::new(&expense.description),
            Cell::new(money(expense.amount)),
        ]);
        total += expense.amount;
    }
    format!(
        "Expenses ({} entries, total: {})\n{table}",
        ledger.len(),
        money(total)
    )
}
