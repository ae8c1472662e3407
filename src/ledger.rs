use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, TallyError};
use crate::models::{Expense, DATE_FORMAT};

/// Header row written at the top of every ledger file.
pub const FILE_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// In-memory, append-only expense store for one session. Entries keep
/// insertion order; duplicates are allowed.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Expense>,
    dirty: bool,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, expense: Expense) {
        self.entries.push(expense);
        self.dirty = true;
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when entries were appended since the last successful save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

pub fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.replace(',', "").replace('$', "");
    s.trim()
        .parse()
        .map_err(|_| TallyError::InvalidAmount(raw.trim().to_string()))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| TallyError::InvalidDate(raw.trim().to_string()))
}

// ---------------------------------------------------------------------------
// File persistence
// ---------------------------------------------------------------------------

/// Outcome of reading a ledger file: what loaded, what did not, and why.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
    pub warnings: Vec<LoadWarning>,
}

/// One rejected line, with its 1-based position in the file.
#[derive(Debug)]
pub struct LoadWarning {
    pub line: u64,
    pub error: TallyError,
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.len() == FILE_HEADER.len()
        && record
            .iter()
            .zip(FILE_HEADER)
            .all(|(field, name)| field.trim() == name)
}

/// Read a ledger file. The header row is skipped; rows without a date or
/// category are not expenses and are skipped quietly; rows with extra fields
/// or a date/amount that fails to parse are skipped with a warning.
pub fn load(path: &Path) -> Result<(Ledger, LoadSummary)> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut ledger = Ledger::new();
    let mut summary = LoadSummary::default();

    for (idx, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map_or(idx as u64 + 1, |p| p.line());
                summary.skipped += 1;
                summary.warnings.push(LoadWarning {
                    line,
                    error: TallyError::Csv(e),
                });
                continue;
            }
        };
        let line = record.position().map_or(idx as u64 + 1, |p| p.line());

        if is_header(&record) {
            continue;
        }

        // Fields are stored as written; trimming is only for the checks and
        // the numeric/date parses, so a padded description survives a
        // save/load round trip.
        let date_field = record.get(0).unwrap_or("");
        let category = record.get(1).unwrap_or("");
        let description = record.get(2).unwrap_or("");
        let amount_field = record.get(3).unwrap_or("");

        if date_field.trim().is_empty() || category.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        if record.len() > FILE_HEADER.len() {
            summary.skipped += 1;
            summary.warnings.push(LoadWarning {
                line,
                error: TallyError::MalformedLine(format!(
                    "expected at most 4 fields, found {}",
                    record.len()
                )),
            });
            continue;
        }

        let date = match parse_date(date_field) {
            Ok(date) => date,
            Err(e) => {
                summary.skipped += 1;
                summary.warnings.push(LoadWarning { line, error: e });
                continue;
            }
        };
        let amount = match parse_amount(amount_field) {
            Ok(amount) => amount,
            Err(e) => {
                summary.skipped += 1;
                summary.warnings.push(LoadWarning { line, error: e });
                continue;
            }
        };

        ledger.append(Expense {
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
        });
        summary.loaded += 1;
    }

    // Loaded state matches the file.
    ledger.mark_saved();
    Ok((ledger, summary))
}

/// Rewrite the ledger file completely: header first, then one record per
/// expense in insertion order. Fields with embedded commas come out quoted.
pub fn save(ledger: &Ledger, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(FILE_HEADER)?;
    for expense in ledger.entries() {
        wtr.write_record(expense.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, category: &str, description: &str, date: &str) -> Expense {
        Expense {
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        }
    }

    fn write_file(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("expenses.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("  3 ").unwrap(), 3.0);
        assert_eq!(parse_amount("1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("$5.00").unwrap(), 5.0);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_save_writes_header_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut ledger = Ledger::new();
        ledger.append(expense(12.5, "Food", "Lunch", "2024-05-01"));
        save(&ledger, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Date,Category,Description,Amount\n"));
        assert!(content.contains("2024-05-01,Food,Lunch,12.5"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut ledger = Ledger::new();
        ledger.append(expense(12.5, "Food", "Lunch", "2024-05-01"));
        ledger.append(expense(3.0, "Transport", "Bus fare", "2024-05-03"));
        save(&ledger, &path).unwrap();

        let (loaded, summary) = load(&path).unwrap();
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.skipped, 0);
        assert!(summary.warnings.is_empty());
        assert_eq!(loaded.entries(), ledger.entries());
    }

    #[test]
    fn test_roundtrip_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut ledger = Ledger::new();
        ledger.append(expense(45.0, "Food", "Dinner, drinks, tip", "2024-07-12"));
        save(&ledger, &path).unwrap();

        let (loaded, summary) = load(&path).unwrap();
        assert_eq!(summary.loaded, 1);
        assert!(summary.warnings.is_empty());
        assert_eq!(loaded.entries()[0].description, "Dinner, drinks, tip");
    }

    #[test]
    fn test_roundtrip_preserves_padded_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut ledger = Ledger::new();
        ledger.append(expense(8.0, "Food", " padded ", "2024-03-09"));
        save(&ledger, &path).unwrap();

        let (loaded, summary) = load(&path).unwrap();
        assert_eq!(summary.loaded, 1);
        assert!(summary.warnings.is_empty());
        assert_eq!(loaded.entries(), ledger.entries());
    }

    #[test]
    fn test_load_skips_header_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "Date,Category,Description,Amount\n2024-05-01,Food,Lunch,12.5\n",
        );
        let (ledger, summary) = load(&path).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_load_skips_rows_missing_date_or_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "Date,Category,Description,Amount\n\
             2024-01-01,,no category,5.00\n\
             ,Food,no date,5.00\n\
             2024-01-02,Food,kept,7.50\n",
        );
        let (ledger, summary) = load(&path).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 2);
        assert!(summary.warnings.is_empty());
        assert_eq!(ledger.entries()[0].description, "kept");
    }

    #[test]
    fn test_load_warns_on_bad_amount() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "2024-01-01,Food,Lunch,abc\n2024-01-02,Food,Coffee,4.00\n",
        );
        let (ledger, summary) = load(&path).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].line, 1);
        assert!(matches!(
            summary.warnings[0].error,
            TallyError::InvalidAmount(_)
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_load_warns_on_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "01/15/2024,Food,Lunch,5.00\n");
        let (ledger, summary) = load(&path).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(summary.warnings.len(), 1);
        assert!(matches!(
            summary.warnings[0].error,
            TallyError::InvalidDate(_)
        ));
    }

    #[test]
    fn test_load_warns_on_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "2024-01-01,Food,lunch with Sam, extra,5.00\n");
        let (ledger, summary) = load(&path).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(summary.warnings.len(), 1);
        assert!(matches!(
            summary.warnings[0].error,
            TallyError::MalformedLine(_)
        ));
    }

    #[test]
    fn test_load_warns_on_missing_amount_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "2024-01-01,Food,Lunch\n");
        let (ledger, summary) = load(&path).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(summary.warnings.len(), 1);
        assert!(matches!(
            summary.warnings[0].error,
            TallyError::InvalidAmount(_)
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(TallyError::Io(_))));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut ledger = Ledger::new();
        assert!(!ledger.is_dirty());
        ledger.append(expense(1.0, "Misc", "", "2024-01-01"));
        assert!(ledger.is_dirty());
        ledger.mark_saved();
        assert!(!ledger.is_dirty());
    }

    #[test]
    fn test_load_returns_clean_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "2024-01-01,Food,Lunch,5.00\n");
        let (ledger, _) = load(&path).unwrap();
        assert!(!ledger.is_dirty());
    }
}
