//! Monthly expense allocation
//!
//! The core computation: aggregate a ledger of dated expenses into monthly
//! totals, normalize the user percentage table against its own sum, and
//! expand the cross product of months and users into allocation rows.
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no shared
//! state, all-or-nothing on failure. Calling it twice with the same inputs
//! produces identical output.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{ShareError, ShareResult};
use crate::models::{Allocation, Expense, MonthKey, MonthlyTotal, UserShare};

/// Sum expenses by calendar month
///
/// Produces exactly one total per distinct month present in the input,
/// in ascending month order. The sum over all totals equals the sum over
/// all input amounts.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month()).or_insert(0.0) += expense.amount;
    }

    totals
        .into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}

/// Normalize raw percentages against their own sum
///
/// Returns one normalized share per input entry, in input order. The
/// normalized shares sum to 1. Fails with `ZeroWeight` when the raw
/// percentages sum to zero (including the empty table), since the division
/// is undefined.
pub fn normalize_shares(shares: &[UserShare]) -> ShareResult<Vec<f64>> {
    let total_weight: f64 = shares.iter().map(|s| s.percentage).sum();
    if total_weight == 0.0 {
        return Err(ShareError::ZeroWeight);
    }

    debug!("normalizing {} shares, total weight {}", shares.len(), total_weight);
    Ok(shares.iter().map(|s| s.percentage / total_weight).collect())
}

/// Allocate monthly expense totals across users by normalized share
///
/// Output contains one row per (month, user) pair: months outer in
/// ascending order, users inner in input order. For each month, the user
/// amounts sum to that month's total; across the whole result the
/// allocated amounts sum to the input amounts.
///
/// Duplicate `user_id` entries in the share table are treated as distinct
/// contributors: each adds its own weight to the denominator and receives
/// its own rows.
pub fn allocate(expenses: &[Expense], shares: &[UserShare]) -> ShareResult<Vec<Allocation>> {
    let totals = monthly_totals(expenses);
    let normalized = normalize_shares(shares)?;

    debug!(
        "allocating {} months across {} share entries",
        totals.len(),
        shares.len()
    );

    let mut allocations = Vec::with_capacity(totals.len() * shares.len());
    for total in &totals {
        for (share, normalized_share) in shares.iter().zip(&normalized) {
            allocations.push(Allocation::new(
                share.user_id.clone(),
                total.month,
                total.amount * normalized_share,
            ));
        }
    }

    Ok(allocations)
}
