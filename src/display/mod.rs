//! Display formatting for terminal output
//!
//! Formats allocation results and monthly totals as fixed-width text
//! tables for the terminal.

use crate::models::{Allocation, MonthlyTotal};

/// Format a list of allocations as a table
pub fn format_allocation_table(allocations: &[Allocation]) -> String {
    if allocations.is_empty() {
        return "No allocations.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>8} {:>14}\n",
        "User", "Month", "Amount"
    ));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for allocation in allocations {
        output.push_str(&format!(
            "{:<20} {:>8} {:>14.2}\n",
            truncate(&allocation.user_id, 20),
            allocation.month.to_string(),
            allocation.amount
        ));
    }

    output
}

/// Format a list of monthly totals as a table
pub fn format_monthly_totals(totals: &[MonthlyTotal]) -> String {
    if totals.is_empty() {
        return "No expenses.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>8} {:>14}\n", "Month", "Total"));
    output.push_str(&"-".repeat(23));
    output.push('\n');

    let mut sum = 0.0;
    for total in totals {
        output.push_str(&format!(
            "{:>8} {:>14.2}\n",
            total.month.to_string(),
            total.amount
        ));
        sum += total.amount;
    }

    output.push_str(&"-".repeat(23));
    output.push('\n');
    output.push_str(&format!("{:>8} {:>14.2}\n", "All", sum));

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;

    #[test]
    fn test_format_allocation_table() {
        let allocations = vec![
            Allocation::new("A", MonthKey::new(2024, 1).unwrap(), 75.0),
            Allocation::new("B", MonthKey::new(2024, 1).unwrap(), 75.0),
        ];

        let table = format_allocation_table(&allocations);
        assert!(table.contains("User"));
        assert!(table.contains("2024-01"));
        assert!(table.contains("75.00"));
    }

    #[test]
    fn test_format_empty_allocations() {
        assert_eq!(format_allocation_table(&[]), "No allocations.\n");
    }

    #[test]
    fn test_format_monthly_totals_includes_sum() {
        let totals = vec![
            MonthlyTotal {
                month: MonthKey::new(2024, 1).unwrap(),
                amount: 150.0,
            },
            MonthlyTotal {
                month: MonthKey::new(2024, 2).unwrap(),
                amount: 200.0,
            },
        ];

        let table = format_monthly_totals(&totals);
        assert!(table.contains("150.00"));
        assert!(table.contains("200.00"));
        assert!(table.contains("350.00"));
    }

    #[test]
    fn test_truncate_long_user_ids() {
        let allocations = vec![Allocation::new(
            "a-very-long-user-identifier-indeed",
            MonthKey::new(2024, 1).unwrap(),
            10.0,
        )];

        let table = format_allocation_table(&allocations);
        assert!(table.contains('…'));
    }
}
