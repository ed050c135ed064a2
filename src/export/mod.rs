//! Export module for expense-share
//!
//! Provides CSV export of allocation results for spreadsheet use.

pub mod csv;

pub use csv::export_allocations_csv;
