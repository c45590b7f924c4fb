//! Product code newtype.
//!
//! Catalog codes are displayed exactly as loaded but compared
//! case-insensitively, so `a10-x` and `A10-X` name the same product.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A product code with a case-insensitive identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProductCode {
    raw: String,
    key: String,
}

impl ProductCode {
    /// Create a code, trimming surrounding whitespace.
    pub fn new(code: impl Into<String>) -> Self {
        let raw = code.into().trim().to_string();
        let key = raw.to_lowercase();
        Self { raw, key }
    }

    /// The code as loaded from the catalog.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl PartialEq for ProductCode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ProductCode {}

impl Hash for ProductCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for ProductCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProductCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<String> for ProductCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ProductCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.raw
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_identity() {
        let a = ProductCode::new("A10-X");
        let b = ProductCode::new("a10-x");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "A10-X");
        assert_eq!(a, ProductCode::new(" a10-X "));
    }

    #[test]
    fn test_trimmed_on_creation() {
        let code = ProductCode::new("  LP-12 ");
        assert_eq!(code.as_str(), "LP-12");
        assert_eq!(code.key(), "lp-12");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let code: ProductCode = serde_json::from_str("\"DL-9W\"").unwrap();
        assert_eq!(code.as_str(), "DL-9W");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"DL-9W\"");
    }
}
