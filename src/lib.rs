//! expense-share - Splits pooled monthly expenses across users
//!
//! This library allocates a shared pool of monthly expenses among a fixed
//! set of users according to pre-assigned percentage shares. It reads a
//! ledger of dated expense transactions, aggregates them by calendar
//! month, and distributes each month's total proportionally to each user
//! based on a normalized percentage table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, months, shares, allocations)
//! - `services`: CSV ingestion and the allocation computation
//! - `display`: Terminal table formatting
//! - `export`: CSV export of allocation results
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use expense_share::models::{parse_share_table, Expense};
//! use expense_share::services::allocate;
//! use chrono::NaiveDate;
//!
//! let expenses = vec![
//!     Expense::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 100.0),
//!     Expense::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(), 50.0),
//! ];
//! let shares = parse_share_table(
//!     r#"[{"user_id": "a", "percentage": 50}, {"user_id": "b", "percentage": 50}]"#,
//! )?;
//!
//! let allocations = allocate(&expenses, &shares)?;
//! assert_eq!(allocations.len(), 2);
//! assert_eq!(allocations[0].amount, 75.0);
//! # Ok::<(), expense_share::ShareError>(())
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{ShareError, ShareResult};
