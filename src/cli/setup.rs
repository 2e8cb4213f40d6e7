use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

const EXAMPLE_LEDGER: &str = include_str!("../../docs/example_ledger.yaml");

/// Writes the example ledger to the default location
pub fn setup() -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(path)
}

/// Writes the example ledger to `path`, refusing to overwrite an existing file
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Ledger file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, EXAMPLE_LEDGER)
        .with_context(|| format!("Failed to write ledger file to {}", path.display()))?;

    tracing::info!("Created example ledger at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_ledger_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("ledger.yaml");

        setup_at_path(&path)?;

        assert!(path.exists());
        let content = fs::read_to_string(&path)?;
        assert!(content.contains("transactions:"));
        assert!(content.contains("holdings:"));
        assert!(content.contains("portfolio:"));

        Ok(())
    }

    #[test]
    fn test_setup_fails_if_ledger_exists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("ledger.yaml");
        fs::write(&path, "test")?;

        let result = setup_at_path(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path)?, "test");

        Ok(())
    }

    #[test]
    fn test_example_ledger_is_valid() -> Result<()> {
        let config: AppConfig =
            serde_yaml::from_str(EXAMPLE_LEDGER).context("Failed to parse example ledger")?;
        let dashboard = config.into_dashboard()?;
        let engine = dashboard.engine();

        assert_eq!(engine.total_assets(), dec!(72000));
        assert_eq!(engine.monthly_income(), dec!(4950));
        assert_eq!(engine.monthly_expenses(), dec!(1120));
        assert_eq!(engine.net_income(), dec!(3830));
        assert_eq!(dashboard.current_series().len(), 6);

        Ok(())
    }
}
