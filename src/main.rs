use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use wealthflow::core::ReportingPeriod;
use wealthflow::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional ledger file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for wealthflow::AppCommand {
    fn from(cmd: Commands) -> wealthflow::AppCommand {
        match cmd {
            Commands::Summary => wealthflow::AppCommand::Summary,
            Commands::Alloc => wealthflow::AppCommand::Alloc,
            Commands::Transactions => wealthflow::AppCommand::Transactions,
            Commands::Portfolio { period } => wealthflow::AppCommand::Portfolio(period),
            Commands::Dashboard => wealthflow::AppCommand::Dashboard,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an example ledger file
    Setup,
    /// Display total assets, income, expenses and net
    Summary,
    /// Display asset allocation
    Alloc,
    /// Display recorded transactions
    Transactions,
    /// Display portfolio value history
    Portfolio {
        /// Reporting period: week, month or year
        #[arg(short, long)]
        period: Option<ReportingPeriod>,
    },
    /// Display every dashboard section
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => wealthflow::cli::setup::setup(),
        Some(cmd) => wealthflow::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
