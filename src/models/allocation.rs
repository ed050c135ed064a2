//! Allocation output row
//!
//! One row of the allocator's result: the portion of a month's total
//! expenses assigned to one user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::MonthKey;

/// One user's share of one month's expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// User the amount is allocated to
    pub user_id: String,

    /// Calendar month the amount covers
    pub month: MonthKey,

    /// Allocated amount: the month's total scaled by the user's
    /// normalized share
    pub amount: f64,
}

impl Allocation {
    /// Create a new allocation row
    pub fn new(user_id: impl Into<String>, month: MonthKey, amount: f64) -> Self {
        Self {
            user_id: user_id.into(),
            month,
            amount,
        }
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.user_id, self.month, self.amount)
    }
}
