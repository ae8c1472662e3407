use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Ledger file used when neither settings nor --file name one.
pub const DEFAULT_LEDGER_FILE: &str = "expenses.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_ledger_path")]
    pub ledger_path: String,
}

fn default_ledger_path() -> String {
    DEFAULT_LEDGER_FILE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tally")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TallyError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Ledger path for this invocation: the --file flag beats settings, settings
/// beat the default. Relative paths stay relative to the working directory.
pub fn resolve_ledger_path(flag: Option<&str>) -> PathBuf {
    let raw = match flag {
        Some(path) => path.to_string(),
        None => load_settings().ledger_path,
    };
    PathBuf::from(expand_home(&raw))
}

pub fn expand_home(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
