//! Expense record and derived monthly total
//!
//! An `Expense` is one row of the input ledger: a dated amount. Extra
//! columns in the source CSV are not carried through. A `MonthlyTotal` is
//! the sum of all expense amounts falling in one calendar month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::MonthKey;

/// One expense event from the input ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount (any sign or magnitude)
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    /// The calendar month this expense falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.date.format("%Y-%m-%d"), self.amount)
    }
}

/// Total expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month this total covers
    pub month: MonthKey,

    /// Sum of all expense amounts in the month
    pub amount: f64,
}

impl fmt::Display for MonthlyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.month, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_month() {
        let expense = Expense::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 100.0);
        assert_eq!(expense.month(), MonthKey::new(2024, 1).unwrap());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), -42.5);
        assert_eq!(format!("{}", expense), "2024-01-05 -42.50");

        let total = MonthlyTotal {
            month: MonthKey::new(2024, 1).unwrap(),
            amount: 150.0,
        };
        assert_eq!(format!("{}", total), "2024-01 150.00");
    }
}
