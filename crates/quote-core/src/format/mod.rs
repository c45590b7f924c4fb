//! Text formatting module.
//!
//! Description normalization and the copy-paste export layout.

mod description;
mod text;

pub use description::normalize_description;
pub use text::{format_long_date, TextFormatter, DEFAULT_DISCLAIMER, HEADER_RULE};
