//! mealplan - A terminal meal planner
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use mealplan::LaunchOptions;
use mealplan_core::prelude::*;
use mealplan_core::MonthLabel;

/// mealplan - Plan groceries, weekly meals and recipes from the terminal
#[derive(Parser, Debug)]
#[command(name = "mealplan", version)]
#[command(about = "Plan groceries, weekly meals and recipes from the terminal", long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/mealplan/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Month to open on, e.g. "April 2025"
    #[arg(long, value_name = "MONTH YEAR")]
    month: Option<MonthLabel>,

    /// Disable remote recipe search
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    mealplan::run(LaunchOptions {
        config: args.config,
        month: args.month,
        offline: args.offline,
    })
    .await
}
