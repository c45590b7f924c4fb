//! Selection of catalog codes for a quote.

use crate::error::QuoteError;
use crate::ids::ProductCode;
use crate::selection::{parse_quantity, Variant, VariantQuantities};
use serde::{Deserialize, Serialize};

/// Default cap on distinct codes in simple mode.
pub const SIMPLE_MAX_ITEMS: usize = 10;

/// Default cap on distinct codes in variant-quantity mode.
pub const VARIANT_MAX_ITEMS: usize = 20;

/// How selected items carry quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Membership only; variant quantities stay absent.
    Simple,
    /// Each item may carry a quantity per finish variant.
    #[default]
    Variant,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Simple => "simple",
            SelectionMode::Variant => "variant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(SelectionMode::Simple),
            "variant" | "variant-quantity" => Some(SelectionMode::Variant),
            _ => None,
        }
    }

    /// Default capacity for this mode.
    pub fn default_max_items(&self) -> usize {
        match self {
            SelectionMode::Simple => SIMPLE_MAX_ITEMS,
            SelectionMode::Variant => VARIANT_MAX_ITEMS,
        }
    }
}

/// One selected code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionEntry {
    pub code: ProductCode,
    pub variants: VariantQuantities,
}

/// Selected codes in insertion order.
///
/// Each code appears at most once and the number of codes never exceeds
/// `max_items`. Quantities do not count towards the cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    mode: SelectionMode,
    max_items: usize,
    entries: Vec<SelectionEntry>,
}

impl Selection {
    /// Create an empty selection with the mode's default capacity.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            max_items: mode.default_max_items(),
            entries: Vec::new(),
        }
    }

    /// Override the capacity.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Check or uncheck a code.
    ///
    /// Checking a code that is already selected is a no-op that keeps its
    /// quantities, even when the selection is full: membership is checked
    /// before capacity. Checking a new code at capacity fails and leaves
    /// the selection as is.
    pub fn toggle(&mut self, code: ProductCode, checked: bool) -> Result<(), QuoteError> {
        if checked {
            self.select(code)
        } else {
            self.deselect(&code);
            Ok(())
        }
    }

    /// Add a code with no variant quantities.
    pub fn select(&mut self, code: ProductCode) -> Result<(), QuoteError> {
        if self.contains(&code) {
            return Ok(());
        }
        if self.is_full() {
            tracing::debug!(code = %code, max = self.max_items, "Selection at capacity");
            return Err(QuoteError::Capacity {
                max: self.max_items,
            });
        }
        self.entries.push(SelectionEntry {
            code,
            variants: VariantQuantities::default(),
        });
        Ok(())
    }

    /// Remove a code. Returns whether it was selected.
    pub fn deselect(&mut self, code: &ProductCode) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.code != code);
        self.entries.len() < len_before
    }

    /// Set a variant quantity from raw input.
    ///
    /// An unselected code is selected first (subject to capacity). Zero,
    /// empty or non-numeric input stores "absent". Returns the stored value.
    pub fn set_quantity(
        &mut self,
        code: ProductCode,
        variant: Variant,
        raw: &str,
    ) -> Result<Option<u32>, QuoteError> {
        if self.mode == SelectionMode::Simple {
            return Err(QuoteError::VariantsDisabled);
        }

        self.select(code.clone())?;

        let qty = parse_quantity(raw);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.variants.set(variant, qty);
        }
        Ok(qty)
    }

    /// Unchoose a variant on a selected code.
    pub fn clear_variant(&mut self, code: &ProductCode, variant: Variant) -> Result<(), QuoteError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.code == code)
            .ok_or_else(|| QuoteError::NotSelected(code.to_string()))?;
        entry.variants.set(variant, None);
        Ok(())
    }

    /// Remove all codes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, code: &ProductCode) -> bool {
        self.entries.iter().any(|e| &e.code == code)
    }

    pub fn get(&self, code: &ProductCode) -> Option<&SelectionEntry> {
        self.entries.iter().find(|e| &e.code == code)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_items
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Status line, e.g. `Selected: 3/20`.
    pub fn summary(&self) -> String {
        format!("Selected: {}/{}", self.entries.len(), self.max_items)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ProductCode {
        ProductCode::new(s)
    }

    #[test]
    fn test_default_capacity_per_mode() {
        assert_eq!(Selection::new(SelectionMode::Simple).max_items(), 10);
        assert_eq!(Selection::new(SelectionMode::Variant).max_items(), 20);
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = Selection::default();
        selection.toggle(code("A1"), true).unwrap();
        assert!(selection.contains(&code("a1")));
        selection.toggle(code("A1"), false).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_code_appears_once() {
        let mut selection = Selection::default();
        selection.select(code("A1")).unwrap();
        selection.set_quantity(code("A1"), Variant::Dl, "4").unwrap();
        selection.select(code("a1")).unwrap();
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get(&code("A1")).unwrap().variants.dl, Some(4));
    }

    #[test]
    fn test_capacity_leaves_state_unchanged() {
        let mut selection = Selection::new(SelectionMode::Simple).with_max_items(2);
        selection.select(code("A1")).unwrap();
        selection.select(code("A2")).unwrap();
        let before = selection.clone();

        let err = selection.toggle(code("A3"), true).unwrap_err();
        assert!(matches!(err, QuoteError::Capacity { max: 2 }));
        assert_eq!(selection, before);

        // Unchecking still works at capacity.
        selection.toggle(code("A1"), false).unwrap();
        selection.toggle(code("A3"), true).unwrap();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_quantity_normalized_to_absent() {
        let mut selection = Selection::default();
        selection.select(code("A1")).unwrap();
        for raw in ["0", "", "abc"] {
            selection.set_quantity(code("A1"), Variant::Ww, "7").unwrap();
            let stored = selection.set_quantity(code("A1"), Variant::Ww, raw).unwrap();
            assert_eq!(stored, None);
            assert_eq!(selection.get(&code("A1")).unwrap().variants.ww, None);
        }
    }

    #[test]
    fn test_recheck_at_capacity_keeps_entry() {
        let mut selection = Selection::default().with_max_items(1);
        selection.set_quantity(code("A1"), Variant::Ww, "2").unwrap();
        assert!(selection.is_full());

        selection.toggle(code("a1"), true).unwrap();
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get(&code("A1")).unwrap().variants.ww, Some(2));
    }

    #[test]
    fn test_oversized_quantity_is_kept() {
        let mut selection = Selection::default();
        let stored = selection.set_quantity(code("A1"), Variant::Dl, "5000000000").unwrap();
        assert_eq!(stored, Some(u32::MAX));
        assert_eq!(selection.get(&code("A1")).unwrap().variants.dl, Some(u32::MAX));
    }

    #[test]
    fn test_quantity_auto_selects() {
        let mut selection = Selection::default();
        selection.set_quantity(code("A1"), Variant::Dl, "5").unwrap();
        assert_eq!(selection.get(&code("A1")).unwrap().variants.dl, Some(5));
    }

    #[test]
    fn test_quantity_auto_select_respects_capacity() {
        let mut selection = Selection::default().with_max_items(1);
        selection.select(code("A1")).unwrap();
        assert!(selection.set_quantity(code("A1"), Variant::Dl, "3").is_ok());
        let err = selection.set_quantity(code("A2"), Variant::Dl, "3").unwrap_err();
        assert!(matches!(err, QuoteError::Capacity { .. }));
    }

    #[test]
    fn test_simple_mode_rejects_quantities() {
        let mut selection = Selection::new(SelectionMode::Simple);
        selection.select(code("A1")).unwrap();
        let err = selection.set_quantity(code("A1"), Variant::Dl, "2").unwrap_err();
        assert!(matches!(err, QuoteError::VariantsDisabled));
    }

    #[test]
    fn test_clear_variant_requires_selection() {
        let mut selection = Selection::default();
        let err = selection.clear_variant(&code("A1"), Variant::Dl).unwrap_err();
        assert!(matches!(err, QuoteError::NotSelected(_)));
    }

    #[test]
    fn test_insertion_order_and_summary() {
        let mut selection = Selection::default();
        selection.select(code("B")).unwrap();
        selection.select(code("A")).unwrap();
        let order: Vec<&str> = selection.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
        assert_eq!(selection.summary(), "Selected: 2/20");
    }
}
