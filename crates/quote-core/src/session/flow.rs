//! Quote session state machine.
//!
//! ```text
//!          set_company            enter_quote_mode
//!   Idle ─────────────▶ Searching ────────────────▶ QuoteView
//!    ▲                      ▲     ◀──────────────── │
//!    │   change_company     │      exit_quote_mode  │
//!    └──────────────────────┴───────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::QuoteConfig;
use crate::error::QuoteError;
use crate::ids::ProductCode;
use crate::search::{filter, rank, SearchQuery, SearchResults};
use crate::selection::{Selection, Variant};
use crate::session::{build_quote_items, QuoteLineItem};

/// Which item set the formatter consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    Search,
    Quote,
}

/// Session state derived from the company name and view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No company entered yet.
    Idle,
    /// Company set, showing search results.
    Searching,
    /// Company set, showing the quote.
    QuoteView,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Searching => "searching",
            SessionState::QuoteView => "viewing the quote",
        }
    }
}

/// State of one quoting session.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    config: QuoteConfig,
    catalog: Catalog,
    company: Option<String>,
    selection: Selection,
    view: ViewMode,
    last_query: String,
}

impl QuoteSession {
    /// Create an idle session over a catalog.
    pub fn new(catalog: Catalog, config: QuoteConfig) -> Self {
        let selection = config.new_selection();
        Self {
            config,
            catalog,
            company: None,
            selection,
            view: ViewMode::Search,
            last_query: String::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.company, self.view) {
            (None, _) => SessionState::Idle,
            (Some(_), ViewMode::Search) => SessionState::Searching,
            (Some(_), ViewMode::Quote) => SessionState::QuoteView,
        }
    }

    /// Set the company name and start searching.
    ///
    /// The name is trimmed and uppercased; an empty name is rejected.
    pub fn set_company(&mut self, name: &str) -> Result<&str, QuoteError> {
        self.require_state(&[SessionState::Idle], "set the company")?;

        let name = name.trim();
        if name.is_empty() {
            return Err(QuoteError::Validation(
                "Please enter a company name".to_string(),
            ));
        }

        let company = self.company.insert(name.to_uppercase());
        tracing::debug!(company = %company, "Company set");
        Ok(company.as_str())
    }

    /// Return to name entry, dropping the selection and the last query.
    ///
    /// Returns the previous name so it can prefill the entry field.
    pub fn change_company(&mut self) -> Option<String> {
        self.selection.clear();
        self.view = ViewMode::Search;
        self.last_query.clear();
        self.company.take()
    }

    /// Run a search and remember the query.
    ///
    /// A query long enough to run switches the view back to search results.
    pub fn search(&mut self, query: &str) -> Result<SearchResults, QuoteError> {
        self.require_company("search")?;

        self.last_query = query.to_string();
        let query = self.query(query);
        if query.is_searchable() {
            self.set_view(ViewMode::Search);
        }
        Ok(rank(&query, &self.catalog))
    }

    /// Check or uncheck a product.
    pub fn toggle_select(&mut self, code: &str, checked: bool) -> Result<(), QuoteError> {
        self.require_company("change the selection")?;

        if !checked {
            self.selection.deselect(&ProductCode::new(code));
            return Ok(());
        }

        let code = self.catalog_code(code)?;
        self.selection.toggle(code, true)
    }

    /// Set a variant quantity from raw input, selecting the product if needed.
    pub fn set_variant_quantity(
        &mut self,
        code: &str,
        variant: Variant,
        raw: &str,
    ) -> Result<Option<u32>, QuoteError> {
        self.require_company("set a quantity")?;

        let requested = ProductCode::new(code);
        let code = match self.selection.get(&requested) {
            Some(entry) => entry.code.clone(),
            None => self.catalog_code(code)?,
        };
        self.selection.set_quantity(code, variant, raw)
    }

    /// Unchoose a variant on a selected product.
    pub fn clear_variant(&mut self, code: &str, variant: Variant) -> Result<(), QuoteError> {
        self.require_company("change a variant")?;
        self.selection.clear_variant(&ProductCode::new(code), variant)
    }

    /// Switch to the quote view.
    ///
    /// With an empty selection this is a no-op and returns `None`.
    pub fn enter_quote_mode(&mut self) -> Result<Option<Vec<QuoteLineItem>>, QuoteError> {
        self.require_company("build a quote")?;

        if self.selection.is_empty() {
            return Ok(None);
        }

        self.set_view(ViewMode::Quote);
        Ok(Some(self.quote_items()))
    }

    /// Switch back to search results.
    ///
    /// Re-runs the last query when it is long enough; returns `None` otherwise.
    pub fn exit_quote_mode(&mut self) -> Result<Option<SearchResults>, QuoteError> {
        self.require_company("leave the quote")?;

        self.set_view(ViewMode::Search);
        let query = self.query(&self.last_query);
        if query.is_searchable() {
            Ok(Some(rank(&query, &self.catalog)))
        } else {
            Ok(None)
        }
    }

    /// Clear the query and the selection.
    pub fn clear_search(&mut self) {
        self.last_query.clear();
        self.selection.clear();
        self.set_view(ViewMode::Search);
    }

    /// Quote lines for the current selection.
    pub fn quote_items(&self) -> Vec<QuoteLineItem> {
        build_quote_items(&self.selection, &self.catalog)
    }

    /// Swap in a reloaded catalog.
    ///
    /// The selection is kept; codes that no longer exist are skipped when
    /// the quote is built.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        tracing::info!(products = catalog.len(), "Catalog replaced");
        self.catalog = catalog;
    }

    /// Render the current view as copy-paste text.
    ///
    /// The quote is rendered in quote view with a non-empty selection,
    /// otherwise the products matching the last query in catalog order.
    pub fn export_text(&self, date: NaiveDate) -> Result<String, QuoteError> {
        let company = self.require_company("export")?;
        let formatter = self.config.formatter();

        if self.view == ViewMode::Quote && !self.selection.is_empty() {
            return Ok(formatter.render_quote(company, &self.quote_items(), date));
        }

        let results = filter(&self.query(&self.last_query), &self.catalog);
        Ok(formatter.render_search(company, &results.items, date))
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    fn query(&self, raw: &str) -> SearchQuery {
        SearchQuery::new(raw).with_min_len(self.config.search.min_query_len)
    }

    fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            tracing::debug!(?view, "View mode changed");
            self.view = view;
        }
    }

    /// Resolve a code to the catalog's spelling of it.
    fn catalog_code(&self, code: &str) -> Result<ProductCode, QuoteError> {
        self.catalog
            .get(code)
            .map(|p| p.code.clone())
            .ok_or_else(|| QuoteError::Validation(format!("Unknown product code: {}", code.trim())))
    }

    fn require_company(&self, action: &str) -> Result<&str, QuoteError> {
        self.company
            .as_deref()
            .ok_or_else(|| QuoteError::InvalidTransition {
                from: SessionState::Idle.as_str().to_string(),
                action: action.to_string(),
            })
    }

    fn require_state(&self, allowed: &[SessionState], action: &str) -> Result<(), QuoteError> {
        let state = self.state();
        if allowed.contains(&state) {
            Ok(())
        } else {
            Err(QuoteError::InvalidTransition {
                from: state.as_str().to_string(),
                action: action.to_string(),
            })
        }
    }
}
