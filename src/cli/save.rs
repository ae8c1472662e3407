use crate::error::Result;
use crate::ledger;
use crate::settings::resolve_ledger_path;

pub fn run(file: Option<&str>) -> Result<()> {
    let path = resolve_ledger_path(file);
    let ledger = super::open_ledger(&path);
    ledger::save(&ledger, &path)?;
    println!("Saved {} expenses to {}", ledger.len(), path.display());
    Ok(())
}
