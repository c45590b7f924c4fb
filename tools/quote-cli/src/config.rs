//! CLI configuration.

use anyhow::{Context, Result};
use quote_core::QuoteConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["quote.toml", ".quote.toml", "quote.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session settings (`[selection]`, `[pricing]`, `[search]`, `[export]`).
    #[serde(flatten)]
    pub quote: QuoteConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the product list is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Generate a default config file content.
pub fn generate_default_config() -> String {
    r#"# Quote tool configuration

[catalog]
path = "data.json"

[selection]
# "variant" (per-finish DL/WW quantities, 20 items) or "simple" (10 items)
mode = "variant"
# max_items = 20

[pricing]
currency = "PHP"

[search]
min_query_len = 2

[export]
disclaimer = "Prices subject to change. Stocks subject to availability. VAT inclusive. Warranty as specified. Price valid as of"
"#
    .to_string()
}
