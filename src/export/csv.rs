//! CSV export functionality
//!
//! Serializes allocation results to the three-column CSV contract:
//! user identifier, month (`YYYY-MM`), allocated amount.

use std::io::Write;

use crate::error::{ShareError, ShareResult};
use crate::models::Allocation;

/// Export allocations to CSV
///
/// Writes a header row followed by one row per allocation, in the order
/// given. Amounts are written with two decimal places.
pub fn export_allocations_csv<W: Write>(
    allocations: &[Allocation],
    writer: &mut W,
) -> ShareResult<()> {
    writeln!(writer, "user_id,month,amount").map_err(|e| ShareError::Export(e.to_string()))?;

    for allocation in allocations {
        writeln!(
            writer,
            "{},{},{:.2}",
            escape_csv(&allocation.user_id),
            allocation.month,
            allocation.amount
        )
        .map_err(|e| ShareError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;

    #[test]
    fn test_export_allocations_csv() {
        let allocations = vec![
            Allocation::new("A", MonthKey::new(2024, 1).unwrap(), 75.0),
            Allocation::new("B", MonthKey::new(2024, 1).unwrap(), 75.0),
            Allocation::new("A", MonthKey::new(2024, 2).unwrap(), 100.0),
        ];

        let mut csv_output = Vec::new();
        export_allocations_csv(&allocations, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "user_id,month,amount");
        assert_eq!(lines[1], "A,2024-01,75.00");
        assert_eq!(lines[3], "A,2024-02,100.00");
    }

    #[test]
    fn test_export_empty_is_header_only() {
        let mut csv_output = Vec::new();
        export_allocations_csv(&[], &mut csv_output).unwrap();
        assert_eq!(String::from_utf8(csv_output).unwrap(), "user_id,month,amount\n");
    }

    #[test]
    fn test_escape_user_ids() {
        let allocations = vec![Allocation::new(
            "smith, jane",
            MonthKey::new(2024, 1).unwrap(),
            10.0,
        )];

        let mut csv_output = Vec::new();
        export_allocations_csv(&allocations, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"smith, jane\",2024-01,10.00"));
    }
}
