//! User share assignments
//!
//! A `UserShare` pairs a user identifier with a raw percentage weight.
//! Weights are not required to sum to 100 (or to any particular total);
//! the allocator normalizes them against their own sum.
//!
//! The share table arrives as user-supplied text and is parsed with a
//! strict structured parser: only a JSON array of `{user_id, percentage}`
//! records is accepted. The input is never evaluated or coerced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ShareError, ShareResult};

/// One percentage assignment from the share table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserShare {
    /// User identifier. Uniqueness is not enforced: duplicate entries are
    /// treated as distinct contributors and each receives its own
    /// allocation row.
    pub user_id: String,

    /// Raw percentage weight as supplied by the caller
    pub percentage: f64,
}

impl UserShare {
    /// Create a new share assignment
    pub fn new(user_id: impl Into<String>, percentage: f64) -> Self {
        Self {
            user_id: user_id.into(),
            percentage,
        }
    }
}

impl fmt::Display for UserShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.user_id, self.percentage)
    }
}

/// Parse a share table from JSON text
///
/// Accepts exactly one shape: an array of objects with a string `user_id`
/// and a numeric `percentage`, e.g.
/// `[{"user_id": "alice", "percentage": 60}, {"user_id": "bob", "percentage": 40}]`.
/// Unknown fields, non-array input, and non-finite percentages are all
/// rejected with a typed error.
pub fn parse_share_table(json: &str) -> ShareResult<Vec<UserShare>> {
    let shares: Vec<UserShare> = serde_json::from_str(json)?;

    for share in &shares {
        if !share.percentage.is_finite() {
            return Err(ShareError::Validation(format!(
                "percentage for user '{}' is not a finite number",
                share.user_id
            )));
        }
    }

    Ok(shares)
}
