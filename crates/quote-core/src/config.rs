//! Quote session configuration.

use serde::{Deserialize, Serialize};

use crate::format::{TextFormatter, DEFAULT_DISCLAIMER};
use crate::money::Currency;
use crate::search::MIN_QUERY_LEN;
use crate::selection::{Selection, SelectionMode};

/// Session configuration. Every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteConfig {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl QuoteConfig {
    /// Empty selection configured for this session.
    pub fn new_selection(&self) -> Selection {
        Selection::new(self.selection.mode).with_max_items(self.selection.effective_max_items())
    }

    /// Text formatter configured for this session.
    pub fn formatter(&self) -> TextFormatter {
        TextFormatter::new(self.pricing.currency).with_disclaimer(self.export.disclaimer.clone())
    }

    /// Check value ranges. Returns a list of problems.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.selection.max_items == Some(0) {
            errors.push("selection.max_items must be at least 1".to_string());
        }
        if self.search.min_query_len == 0 {
            errors.push("search.min_query_len must be at least 1".to_string());
        }
        if self.export.disclaimer.trim().is_empty() {
            errors.push("export.disclaimer must not be empty".to_string());
        }
        errors
    }
}

/// Selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// `variant` (per-finish quantities) or `simple` (membership only).
    #[serde(default)]
    pub mode: SelectionMode,

    /// Cap on distinct codes; defaults to the mode's cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl SelectionConfig {
    pub fn effective_max_items(&self) -> usize {
        self.max_items
            .unwrap_or_else(|| self.mode.default_max_items())
    }
}

/// Price display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    #[serde(default)]
    pub currency: Currency,
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

/// Export text settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Footer text printed before the date.
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

fn default_disclaimer() -> String {
    DEFAULT_DISCLAIMER.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            disclaimer: default_disclaimer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuoteConfig::default();
        assert_eq!(config.selection.mode, SelectionMode::Variant);
        assert_eq!(config.selection.effective_max_items(), 20);
        assert_eq!(config.pricing.currency, Currency::PHP);
        assert_eq!(config.search.min_query_len, 2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_simple_mode_cap() {
        let config: QuoteConfig =
            serde_json::from_str(r#"{"selection": {"mode": "simple"}}"#).unwrap();
        assert_eq!(config.new_selection().max_items(), 10);
    }

    #[test]
    fn test_override_cap() {
        let config: QuoteConfig =
            serde_json::from_str(r#"{"selection": {"max_items": 5}, "pricing": {"currency": "USD"}}"#)
                .unwrap();
        assert_eq!(config.new_selection().max_items(), 5);
        assert_eq!(config.pricing.currency, Currency::USD);
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut config = QuoteConfig::default();
        config.selection.max_items = Some(0);
        assert_eq!(config.validate().len(), 1);
    }
}
