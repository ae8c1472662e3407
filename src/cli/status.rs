use crate::error::Result;
use crate::fmt::money;
use crate::settings::resolve_ledger_path;

pub fn run(file: Option<&str>) -> Result<()> {
    let path = resolve_ledger_path(file);

    println!("Ledger:    {}", path.display());

    if !path.exists() {
        println!();
        println!("No ledger file yet. Record something with `tally add`.");
        return Ok(());
    }

    let ledger = super::open_ledger(&path);
    let total: f64 = ledger.entries().iter().map(|e| e.amount).sum();
    let first = ledger.entries().iter().map(|e| e.date).min();
    let last = ledger.entries().iter().map(|e| e.date).max();

    println!();
    println!("Entries:   {}", ledger.len());
    println!("Total:     {}", money(total));
    if let (Some(first), Some(last)) = (first, last) {
        println!("Span:      {first} to {last}");
    }
    Ok(())
}
