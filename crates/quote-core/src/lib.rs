//! Catalog lookup and quote building for dealer price lists.
//!
//! This crate holds the logic behind the quote tool; it never touches a
//! terminal or clipboard:
//!
//! - **Catalog**: the product list, loaded from JSON and replaced wholesale
//! - **Search**: substring filter with code-first ranking
//! - **Selection**: selected codes with optional per-finish quantities
//! - **Session**: the company / search / quote state machine
//! - **Format**: description normalization and copy-paste export text
//!
//! # Example
//!
//! ```rust,ignore
//! use quote_core::prelude::*;
//!
//! let catalog = Catalog::load("data.json")?;
//! let mut session = QuoteSession::new(catalog, QuoteConfig::default());
//!
//! session.set_company("Acme")?;
//! session.search("A10")?;
//! session.set_variant_quantity("A10-X", Variant::Dl, "5")?;
//! session.enter_quote_mode()?;
//!
//! let text = session.export_text(chrono::Local::now().date_naive())?;
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod format;
pub mod search;
pub mod selection;
pub mod session;

pub use config::QuoteConfig;
pub use error::QuoteError;
pub use ids::ProductCode;
pub use money::{Currency, DealerPrice};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::QuoteConfig;
    pub use crate::error::QuoteError;
    pub use crate::ids::ProductCode;
    pub use crate::money::{format_price, Currency, DealerPrice};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{rank, SearchQuery, SearchResults};

    // Selection
    pub use crate::selection::{Selection, SelectionMode, Variant, VariantQuantities};

    // Session
    pub use crate::session::{QuoteLineItem, QuoteSession, SessionState, ViewMode};

    // Format
    pub use crate::format::{normalize_description, TextFormatter};
}
