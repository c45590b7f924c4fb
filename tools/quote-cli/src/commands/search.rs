//! Search the catalog.

use anyhow::Result;
use quote_core::prelude::*;

use super::{quote_date, SearchArgs};
use crate::context::Context;
use crate::output::truncate;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let config = ctx.config.quote.clone();

    let query = SearchQuery::new(&args.query).with_min_len(config.search.min_query_len);
    if !query.is_searchable() {
        ctx.output.warn(&format!(
            "Enter at least {} characters to search",
            config.search.min_query_len
        ));
        return Ok(());
    }

    if let Some(company) = args.company.as_deref() {
        let mut session = QuoteSession::new(catalog, config);
        session.set_company(company)?;
        session.search(&args.query)?;
        let text = session.export_text(quote_date(None)?)?;
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "text": text }));
        } else {
            println!("{}", text);
        }
        return Ok(());
    }

    let mut results = rank(&query, &catalog);
    let total = results.len();
    if let Some(limit) = args.limit {
        results.items.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output
        .header(&format!("Results for '{}' ({} found)", results.query, total));

    if results.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let currency = config.pricing.currency;
    let widths = [16, 48, 14];
    ctx.output.table_row(&["CODE", "DESCRIPTION", "PRICE"], &widths);
    for product in &results.items {
        let description = truncate(&product.description, widths[1]);
        let price = product.dealer_price.display(currency);
        ctx.output
            .table_row(&[product.code.as_str(), description.as_str(), price.as_str()], &widths);
    }

    if results.len() < total {
        ctx.output
            .info(&format!("Showing {} of {} results", results.len(), total));
    }

    Ok(())
}
