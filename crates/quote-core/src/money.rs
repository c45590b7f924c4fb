//! Dealer price strings and the currency glyph used to display them.
//!
//! Prices are never parsed or rounded: the decimal string from the catalog
//! is passed through verbatim, only decorated with a glyph and a per-piece
//! suffix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    PHP,
    USD,
    EUR,
    GBP,
    JPY,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "PHP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PHP => "PHP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "₱").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PHP => "\u{20b1}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A decimal-formatted dealer price, stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DealerPrice(String);

impl DealerPrice {
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as `<glyph><price>/pc`.
    pub fn display(&self, currency: Currency) -> String {
        format_price(&self.0, currency)
    }
}

impl fmt::Display for DealerPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DealerPrice {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DealerPrice {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Format a price string with the currency glyph and per-piece suffix.
pub fn format_price(price: &str, currency: Currency) -> String {
    format!("{}{}/pc", currency.symbol(), price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_is_verbatim() {
        assert_eq!(format_price("1,250.00", Currency::PHP), "₱1,250.00/pc");
        assert_eq!(format_price("99.5", Currency::PHP), "₱99.5/pc");
    }

    #[test]
    fn test_other_currency() {
        assert_eq!(DealerPrice::from("12.00").display(Currency::USD), "$12.00/pc");
    }
}
