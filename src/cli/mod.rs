//! CLI command handlers
//!
//! This module bridges clap argument parsing with the allocation core. It
//! is plumbing only: load the two inputs, run the computation, render or
//! export the result.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;
use log::info;

use crate::display::{format_allocation_table, format_monthly_totals};
use crate::error::ShareResult;
use crate::export::export_allocations_csv;
use crate::models::{parse_share_table, UserShare};
use crate::services::import::{
    DEFAULT_AMOUNT_COLUMN, DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT,
};
use crate::services::{allocate, monthly_totals, read_expenses, ColumnSpec};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate monthly expense totals across users by percentage share
    Allocate {
        /// Path to the expenses CSV file
        #[arg(short, long)]
        expenses: PathBuf,

        /// Share table: path to a JSON file, or inline JSON
        /// (e.g. '[{"user_id": "a", "percentage": 50}, ...]')
        #[arg(short, long)]
        shares: String,

        /// Export the result to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Header name of the date column
        #[arg(long, default_value = DEFAULT_DATE_COLUMN)]
        date_column: String,

        /// Header name of the amount column
        #[arg(long, default_value = DEFAULT_AMOUNT_COLUMN)]
        amount_column: String,

        /// Date format tried before the common fallbacks
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        date_format: String,
    },

    /// Show total expenses per calendar month
    Totals {
        /// Path to the expenses CSV file
        #[arg(short, long)]
        expenses: PathBuf,

        /// Header name of the date column
        #[arg(long, default_value = DEFAULT_DATE_COLUMN)]
        date_column: String,

        /// Header name of the amount column
        #[arg(long, default_value = DEFAULT_AMOUNT_COLUMN)]
        amount_column: String,

        /// Date format tried before the common fallbacks
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        date_format: String,
    },
}

/// Handle a parsed command
pub fn handle_command(cmd: Commands) -> ShareResult<()> {
    match cmd {
        Commands::Allocate {
            expenses,
            shares,
            output,
            date_column,
            amount_column,
            date_format,
        } => {
            let spec = column_spec(&date_column, &amount_column, &date_format);
            handle_allocate(&expenses, &shares, output.as_deref(), &spec)
        }
        Commands::Totals {
            expenses,
            date_column,
            amount_column,
            date_format,
        } => {
            let spec = column_spec(&date_column, &amount_column, &date_format);
            handle_totals(&expenses, &spec)
        }
    }
}

fn handle_allocate(
    expenses_path: &std::path::Path,
    shares_arg: &str,
    output: Option<&std::path::Path>,
    spec: &ColumnSpec,
) -> ShareResult<()> {
    let file = File::open(expenses_path)?;
    let expenses = read_expenses(file, spec)?;
    let shares = load_share_table(shares_arg)?;

    let allocations = allocate(&expenses, &shares)?;
    info!(
        "allocated {} rows from {} expenses",
        allocations.len(),
        expenses.len()
    );

    print!("{}", format_allocation_table(&allocations));

    if let Some(path) = output {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        export_allocations_csv(&allocations, &mut writer)?;
        println!("\nWrote {} rows to {}", allocations.len(), path.display());
    }

    Ok(())
}

fn handle_totals(expenses_path: &std::path::Path, spec: &ColumnSpec) -> ShareResult<()> {
    let file = File::open(expenses_path)?;
    let expenses = read_expenses(file, spec)?;
    let totals = monthly_totals(&expenses);

    print!("{}", format_monthly_totals(&totals));
    Ok(())
}

/// Load the share table from a file path or inline JSON
///
/// A value whose trimmed form starts with `[` is treated as inline JSON;
/// anything else is read as a file path.
fn load_share_table(arg: &str) -> ShareResult<Vec<UserShare>> {
    let trimmed = arg.trim();
    if trimmed.starts_with('[') {
        parse_share_table(trimmed)
    } else {
        let json = fs::read_to_string(trimmed)?;
        parse_share_table(&json)
    }
}

fn column_spec(date_column: &str, amount_column: &str, date_format: &str) -> ColumnSpec {
    ColumnSpec::new()
        .with_date_column(date_column)
        .with_amount_column(amount_column)
        .with_date_format(date_format)
}
