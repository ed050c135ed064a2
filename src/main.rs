use anyhow::Result;
use clap::Parser;

use expense_share::cli::{handle_command, Commands};

#[derive(Parser)]
#[command(
    name = "expense-share",
    version,
    about = "Splits pooled monthly expenses across users by percentage share",
    long_about = "expense-share reads a ledger of dated expense transactions from CSV, \
                  totals them per calendar month, and distributes each month's total \
                  across a set of users according to a percentage share table."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    handle_command(cli.command)?;

    Ok(())
}
