use std::collections::BTreeMap;

use chrono::Datelike;

use crate::error::{Result, TallyError};
use crate::models::Expense;

// ---------------------------------------------------------------------------
// Month filter
// ---------------------------------------------------------------------------

/// Parse a user-supplied month ("05", "5") into 1-12.
pub fn parse_month(raw: &str) -> Result<u32> {
    let month: u32 = raw
        .trim()
        .parse()
        .map_err(|_| TallyError::InvalidMonth(raw.trim().to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(TallyError::InvalidMonth(raw.trim().to_string()));
    }
    Ok(month)
}

// ---------------------------------------------------------------------------
// Category summary
// ---------------------------------------------------------------------------

pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
    pub count: usize,
    pub pct: f64,
}

pub struct Summary {
    pub categories: Vec<CategoryTotal>,
    pub total: f64,
    pub count: usize,
}

/// Sum expenses per category, categories in lexicographic order. With a
/// month filter only expenses whose date falls in that calendar month (any
/// year) count; with `None` every expense counts.
pub fn summarize(expenses: &[Expense], month: Option<u32>) -> Summary {
    let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    let mut total = 0.0f64;
    let mut count = 0usize;

    for expense in expenses {
        if let Some(m) = month {
            if expense.date.month() != m {
                continue;
            }
        }
        let entry = by_category.entry(expense.category.as_str()).or_default();
        entry.0 += expense.amount;
        entry.1 += 1;
        total += expense.amount;
        count += 1;
    }

    let categories = by_category
        .into_iter()
        .map(|(name, (cat_total, cat_count))| CategoryTotal {
            name: name.to_string(),
            total: cat_total,
            count: cat_count,
            pct: if total != 0.0 {
                cat_total / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    Summary {
        categories,
        total,
        count,
    }
}
