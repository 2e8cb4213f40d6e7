pub mod cli;
pub mod core;

use crate::core::ReportingPeriod;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Summary,
    Alloc,
    Transactions,
    /// `None` uses the ledger's default period.
    Portfolio(Option<ReportingPeriod>),
    Dashboard,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("WealthFlow starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!("Loaded ledger: {config:#?}");

    let currency = config.currency.clone();
    let mut dashboard = config.into_dashboard()?;
    if let AppCommand::Portfolio(Some(period)) = command {
        dashboard.select(period);
    }
    let engine = dashboard.engine();
    let period = dashboard.view().selected();

    match command {
        AppCommand::Summary => cli::summary::run(&engine, &currency),
        AppCommand::Alloc => cli::alloc::run(&engine, &currency),
        AppCommand::Transactions => cli::transactions::run(dashboard.ledger(), &currency),
        AppCommand::Portfolio(_) => cli::portfolio::run(&engine, period, &currency),
        AppCommand::Dashboard => {
            cli::summary::run(&engine, &currency);
            cli::ui::print_separator();
            cli::portfolio::run(&engine, period, &currency);
            cli::ui::print_separator();
            cli::alloc::run(&engine, &currency);
            cli::ui::print_separator();
            cli::transactions::run(dashboard.ledger(), &currency);
        }
    }

    Ok(())
}
