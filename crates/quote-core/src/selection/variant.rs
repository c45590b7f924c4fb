//! Finish variants and their per-variant quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A finish variant that can be quoted with its own quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Daylight.
    Dl,
    /// Warm white.
    Ww,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Dl, Variant::Ww];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dl => "dl",
            Variant::Ww => "ww",
        }
    }

    /// Suffix appended to the code in exported text.
    pub fn code_suffix(&self) -> &'static str {
        match self {
            Variant::Dl => "-DL",
            Variant::Ww => "-WW",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dl" | "daylight" => Some(Variant::Dl),
            "ww" | "warmwhite" | "warm-white" => Some(Variant::Ww),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Optional quantity per variant. `None` means the variant is not chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantQuantities {
    pub dl: Option<u32>,
    pub ww: Option<u32>,
}

impl VariantQuantities {
    pub fn get(&self, variant: Variant) -> Option<u32> {
        match variant {
            Variant::Dl => self.dl,
            Variant::Ww => self.ww,
        }
    }

    /// Store a quantity. Zero is stored as absent.
    pub fn set(&mut self, variant: Variant, qty: Option<u32>) {
        let qty = qty.filter(|&q| q > 0);
        match variant {
            Variant::Dl => self.dl = qty,
            Variant::Ww => self.ww = qty,
        }
    }

    /// True when no variant has a quantity.
    pub fn is_empty(&self) -> bool {
        self.dl.is_none() && self.ww.is_none()
    }

    /// Variants with a quantity, in fixed `dl`, `ww` order.
    pub fn present(&self) -> impl Iterator<Item = (Variant, u32)> + '_ {
        Variant::ALL
            .into_iter()
            .filter_map(|v| self.get(v).map(|q| (v, q)))
    }
}

/// Parse raw quantity input the way a number field reads it.
///
/// Leading whitespace and a sign are accepted and digits are read up to the
/// first non-digit (`"12pcs"` is 12). Values past `u32::MAX` saturate.
/// Anything that does not yield a positive integer is absent.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let digits = &s[..digits_end];

    if negative {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return None;
    }

    // All digits, so parsing fails only on overflow.
    Some(significant.parse::<u32>().unwrap_or(u32::MAX))
}
