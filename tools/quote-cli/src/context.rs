//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use quote_core::catalog::Catalog;
use quote_core::QuoteError;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path of the loaded config file, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, catalog: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = catalog {
            config.catalog.path = path;
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolved catalog path.
    pub fn catalog_path(&self) -> PathBuf {
        self.resolve_path(&self.config.catalog.path)
    }

    /// Read and parse the catalog file.
    pub async fn load_catalog(&self) -> Result<Catalog, QuoteError> {
        let path = self.catalog_path();
        let spinner = self.output.spinner(&format!("Loading {}", path.display()));

        let source = path.clone();
        let result = tokio::task::spawn_blocking(move || Catalog::load(source))
            .await
            .map_err(|e| QuoteError::DataLoad(e.to_string()));

        spinner.finish_and_clear();

        let catalog = result??;
        self.output
            .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(catalog_path: PathBuf) -> Context {
        let mut config = CliConfig::default();
        config.catalog.path = catalog_path.to_string_lossy().to_string();
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("quote-cli-catalog-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"code": "A10", "description": "Downlight", "dealerPrice": "380.00"},
                {"code": "a10", "description": "Duplicate", "dealerPrice": "1.00"}]"#,
        )
        .unwrap();

        let catalog = context(path.clone()).load_catalog().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A10").unwrap().description, "Downlight");
    }

    #[tokio::test]
    async fn test_missing_catalog_is_data_load_error() {
        let path = std::env::temp_dir().join("quote-cli-no-such-catalog.json");
        let err = context(path).load_catalog().await.unwrap_err();
        assert!(matches!(err, QuoteError::DataLoad(_)));
    }
}
