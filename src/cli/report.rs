use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::reports::{self, Summary};
use crate::settings::resolve_ledger_path;

pub fn month(file: Option<&str>, month: &str) -> Result<()> {
    let m = reports::parse_month(month)?;
    let path = resolve_ledger_path(file);
    let ledger = super::open_ledger(&path);
    let summary = reports::summarize(ledger.entries(), Some(m));
    println!("{}", format_summary(&month_title(m), &summary));
    Ok(())
}

pub fn year(file: Option<&str>) -> Result<()> {
    let path = resolve_ledger_path(file);
    let ledger = super::open_ledger(&path);
    let summary = reports::summarize(ledger.entries(), None);
    println!("{}", format_summary("Annual Report", &summary));
    Ok(())
}

pub fn month_title(month: u32) -> String {
    format!("Monthly Report (month {month:02})")
}

pub fn format_summary(title: &str, summary: &Summary) -> String {
    if summary.count == 0 {
        return format!("{title}\nNo matching expenses.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%", "Count"]);
    for item in &summary.categories {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(money(item.total)),
            Cell::new(format!("{:.1}%", item.pct)),
            Cell::new(item.count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(summary.total)),
        Cell::new(""),
        Cell::new(summary.count),
    ]);
    format!("{title}\n{table}")
}
