use crate::error::Result;
use crate::settings::{expand_home, load_settings, save_settings, DEFAULT_LEDGER_FILE};

pub fn run(ledger: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    settings.ledger_path = match ledger {
        Some(path) => expand_home(&path),
        None => DEFAULT_LEDGER_FILE.to_string(),
    };
    save_settings(&settings)?;

    println!("Initialized tally. Ledger path: {}", settings.ledger_path);
    Ok(())
}
