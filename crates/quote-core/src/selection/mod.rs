//! Selection module.
//!
//! Contains the selected-code set and per-variant quantities.

mod selection;
mod variant;

pub use selection::{
    Selection, SelectionEntry, SelectionMode, SIMPLE_MAX_ITEMS, VARIANT_MAX_ITEMS,
};
pub use variant::{parse_quantity, Variant, VariantQuantities};
