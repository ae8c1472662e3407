use std::fmt;

use chrono::NaiveDate;

/// Date form used in the ledger file and accepted from user input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded expense. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// The four ledger-file fields, in file order.
    pub fn to_record(&self) -> [String; 4] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.category.clone(),
            self.description.clone(),
            self.amount.to_string(),
        ]
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<15} {:<25} {:>10}",
            self.date.to_string(),
            self.category,
            self.description,
            format!("${:.2}", self.amount)
        )
    }
}
