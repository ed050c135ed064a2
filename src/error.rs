//! Custom error types for expense-share
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The core never suppresses a failure:
//! every error propagates to the caller, which decides how to render it.

use thiserror::Error;

/// The main error type for expense-share operations
#[derive(Error, Debug)]
pub enum ShareError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV-level errors (unreadable records, broken quoting, etc.)
    #[error("CSV error: {0}")]
    Csv(String),

    /// Share table input errors (malformed JSON, wrong shape)
    #[error("Share table error: {0}")]
    ShareTable(String),

    /// A required column is absent from the expense CSV header
    #[error("missing required column '{0}' in expense CSV")]
    MissingColumn(String),

    /// A required cell is empty or absent in a data row
    #[error("row {row}: missing value for column '{column}'")]
    MissingField { row: usize, column: String },

    /// A date cell could not be parsed with any known format
    #[error("row {row}: could not parse date '{value}'")]
    MalformedDate { row: usize, value: String },

    /// An amount cell could not be parsed as a finite number
    #[error("row {row}: could not parse amount '{value}'")]
    MalformedAmount { row: usize, value: String },

    /// Share percentages sum to zero, so normalization is undefined
    #[error("share percentages sum to zero; cannot normalize")]
    ZeroWeight,

    /// Validation errors for share table contents
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ShareError {
    /// Check if this is a missing-column or missing-field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingColumn(_) | Self::MissingField { .. })
    }

    /// Check if this is a malformed-input error
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedDate { .. } | Self::MalformedAmount { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ShareError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        Self::ShareTable(err.to_string())
    }
}

/// Result type alias for expense-share operations
pub type ShareResult<T> = Result<T, ShareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShareError::ZeroWeight;
        assert_eq!(
            err.to_string(),
            "share percentages sum to zero; cannot normalize"
        );
    }

    #[test]
    fn test_malformed_date_display() {
        let err = ShareError::MalformedDate {
            row: 3,
            value: "not-a-date".into(),
        };
        assert_eq!(err.to_string(), "row 3: could not parse date 'not-a-date'");
        assert!(err.is_malformed());
    }

    #[test]
    fn test_missing_field_checks() {
        let err = ShareError::MissingColumn("date".into());
        assert!(err.is_missing_field());
        assert_eq!(
            err.to_string(),
            "missing required column 'date' in expense CSV"
        );

        let err = ShareError::MissingField {
            row: 1,
            column: "total_amount".into(),
        };
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let share_err: ShareError = io_err.into();
        assert!(matches!(share_err, ShareError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        let share_err: ShareError = json_err.into();
        assert!(matches!(share_err, ShareError::ShareTable(_)));
    }
}
