use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_expense_command, ExpenseCommands, Session};
use expense_tracker::config::paths::{TrackerPaths, DIR_ENV_VAR};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses against a monthly income",
    long_about = "Records dated, categorized expenses in a plain comma-separated \
                  file and shows the running total and the balance left from \
                  your monthly income."
)]
struct Cli {
    /// Directory holding expenses.csv and settings (defaults to the current directory)
    #[arg(long, global = true, env = DIR_ENV_VAR, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };

    let mut session = Session::open(paths)?;
    handle_expense_command(&mut session, cli.command)?;

    Ok(())
}
