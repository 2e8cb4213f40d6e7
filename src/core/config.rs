use crate::core::dashboard::Dashboard;
use crate::core::ledger::{AssetHolding, LedgerStore, PortfolioSample, Transaction};
use crate::core::period::{ReportingPeriod, ViewState};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    pub default_period: Option<ReportingPeriod>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub holdings: Vec<AssetHolding>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioSample>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default ledger");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "wealthflow", "wealthflow")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("ledger.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read ledger file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse ledger file: {}", path.as_ref().display()))?;
        debug!(
            "Successfully loaded ledger with {} transactions",
            config.transactions.len()
        );
        Ok(config)
    }

    /// Validates the records and opens a dashboard session over them.
    pub fn into_dashboard(self) -> Result<Dashboard> {
        let view = ViewState::new(self.default_period.unwrap_or_default());
        let ledger = LedgerStore::new(self.transactions, self.holdings, self.portfolio)
            .context("Ledger file contains invalid records")?;
        Ok(Dashboard::new(ledger, view))
    }
}
