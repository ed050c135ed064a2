//! CSV expense ingestion
//!
//! Reads the expense ledger from a CSV source into typed `Expense` records.
//! The two required columns are located by name through a `ColumnSpec`, so
//! callers can remap a source with different headers without touching the
//! allocator. Any other columns are passed over unused.
//!
//! Parsing is all-or-nothing: the first malformed row aborts the read with
//! a typed error. No row is silently dropped or defaulted.

use std::io::Read;

use chrono::NaiveDate;
use log::debug;

use crate::error::{ShareError, ShareResult};
use crate::models::Expense;

/// Default name of the date column
pub const DEFAULT_DATE_COLUMN: &str = "date";

/// Default name of the amount column
pub const DEFAULT_AMOUNT_COLUMN: &str = "total_amount";

/// Default date format
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// Fallback formats tried after the configured one; bank exports vary.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Column configuration for expense CSV ingestion
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Header name of the date column
    pub date_column: String,
    /// Header name of the amount column
    pub amount_column: String,
    /// Primary date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            amount_column: DEFAULT_AMOUNT_COLUMN.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ColumnSpec {
    /// Create a spec with the default column names
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date column name
    pub fn with_date_column(mut self, name: &str) -> Self {
        self.date_column = name.to_string();
        self
    }

    /// Set the amount column name
    pub fn with_amount_column(mut self, name: &str) -> Self {
        self.amount_column = name.to_string();
        self
    }

    /// Set the primary date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }
}

/// Read expenses from a CSV source
///
/// The first record is treated as a header row and must contain the two
/// columns named by `spec` (matched case-insensitively). Rows are numbered
/// from 1, excluding the header, in error messages.
pub fn read_expenses<R: Read>(reader: R, spec: &ColumnSpec) -> ShareResult<Vec<Expense>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let date_idx = find_column(&headers, &spec.date_column)
        .ok_or_else(|| ShareError::MissingColumn(spec.date_column.clone()))?;
    let amount_idx = find_column(&headers, &spec.amount_column)
        .ok_or_else(|| ShareError::MissingColumn(spec.amount_column.clone()))?;

    let mut expenses = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result?;

        let date_str = record.get(date_idx).map(str::trim).unwrap_or("");
        if date_str.is_empty() {
            return Err(ShareError::MissingField {
                row,
                column: spec.date_column.clone(),
            });
        }
        let date = parse_date(date_str, &spec.date_format).ok_or_else(|| {
            ShareError::MalformedDate {
                row,
                value: date_str.to_string(),
            }
        })?;

        let amount_str = record.get(amount_idx).map(str::trim).unwrap_or("");
        if amount_str.is_empty() {
            return Err(ShareError::MissingField {
                row,
                column: spec.amount_column.clone(),
            });
        }
        let amount = parse_amount(amount_str).ok_or_else(|| ShareError::MalformedAmount {
            row,
            value: amount_str.to_string(),
        })?;

        expenses.push(Expense::new(date, amount));
    }

    debug!("read {} expense rows", expenses.len());
    Ok(expenses)
}

/// Find a column index by header name (case-insensitive)
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Parse a date string using the primary format, then common fallbacks
fn parse_date(s: &str, primary_format: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Some(date);
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}

/// Parse an amount string, handling currency symbols, thousands separators,
/// and accounting-style parentheses for negatives
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E' | '(' | ')'))
        .collect();

    let (negative, value) = if cleaned.starts_with('(') && cleaned.ends_with(')') {
        (true, &cleaned[1..cleaned.len() - 1])
    } else {
        (false, cleaned.as_str())
    };

    let amount: f64 = value.parse().ok()?;
    if !amount.is_finite() {
        return None;
    }

    Some(if negative { -amount } else { amount })
}
