//! Interactive quoting session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use quote_core::prelude::*;

use super::{quote_date, ShellArgs};
use crate::clipboard;
use crate::context::Context;
use crate::output::truncate;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Select(String),
    Unselect(String),
    /// Set a variant quantity; `None` unchooses the variant.
    Qty {
        code: String,
        variant: Variant,
        raw: Option<String>,
    },
    Quote,
    Back,
    Clear,
    Company,
    Copy,
    Reload,
    List,
    Help,
    Quit,
}

const HELP: &[(&str, &str)] = &[
    ("search <text>", "Search by code or description (alias: s, or just type the text)"),
    ("select <code>", "Add a product to the quote"),
    ("unselect <code>", "Remove a product from the quote"),
    ("qty <code> <dl|ww> [n]", "Set a finish quantity; omit n to unchoose the finish"),
    ("list", "Show the current selection"),
    ("quote", "Show the quote for the selection"),
    ("back", "Return to the search results"),
    ("clear", "Clear the search and the selection"),
    ("copy", "Copy the current view to the clipboard"),
    ("company", "Change the company name"),
    ("reload", "Reload the catalog file"),
    ("quit", "Leave the shell"),
];

/// Parse one line of shell input. Returns `None` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" | "/" => ShellCommand::Search(rest.to_string()),
        "select" | "add" => ShellCommand::Select(require_arg(word, rest)?),
        "unselect" | "remove" | "rm" => ShellCommand::Unselect(require_arg(word, rest)?),
        "qty" => parse_qty(rest)?,
        "quote" | "q" => ShellCommand::Quote,
        "back" | "b" => ShellCommand::Back,
        "clear" => ShellCommand::Clear,
        "company" => ShellCommand::Company,
        "copy" | "c" => ShellCommand::Copy,
        "reload" => ShellCommand::Reload,
        "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Search(line.to_string()),
    };

    Ok(Some(command))
}

fn require_arg(word: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("Usage: {} <code>", word);
    }
    Ok(rest.to_string())
}

fn parse_qty(rest: &str) -> Result<ShellCommand> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let (code, variant, raw) = match parts.as_slice() {
        [code, variant] => (code, variant, None),
        [code, variant, raw] => (code, variant, Some(raw.to_string())),
        _ => bail!("Usage: qty <code> <dl|ww> [n]"),
    };
    let Some(variant) = Variant::from_str(variant) else {
        bail!("Unknown finish '{}' (use dl or ww)", variant);
    };
    Ok(ShellCommand::Qty {
        code: code.to_string(),
        variant,
        raw,
    })
}

/// Run the shell command.
pub async fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let mut session = QuoteSession::new(catalog, ctx.config.quote.clone());

    ctx.output.header("Quote shell");
    ctx.output.info(&format!(
        "{} products loaded. Type 'help' for commands.",
        session.catalog().len()
    ));

    if let Some(name) = args.company.as_deref() {
        if let Err(e) = session.set_company(name) {
            ctx.output.warn(&e.to_string());
        }
    }
    if session.company().is_none() && !prompt_company(&mut session, None, ctx)? {
        return Ok(());
    }

    loop {
        let prompt = match session.state() {
            SessionState::QuoteView => format!("{} [quote]", session.company().unwrap_or_default()),
            _ => session.company().unwrap_or_default().to_string(),
        };
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                ctx.output.warn(&e.to_string());
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Company => {
                let previous = session.change_company();
                if !prompt_company(&mut session, previous, ctx)? {
                    break;
                }
            }
            command => {
                if let Err(e) = execute(command, &mut session, ctx).await {
                    ctx.output.error(&e.to_string());
                }
            }
        }
    }

    Ok(())
}

/// Ask for a company name until one is accepted, prefilled with `previous`.
/// Returns false on an empty first answer, which ends the shell.
fn prompt_company(session: &mut QuoteSession, previous: Option<String>, ctx: &Context) -> Result<bool> {
    loop {
        let mut input = Input::<String>::new()
            .with_prompt("Company name")
            .allow_empty(true);
        if let Some(name) = previous.as_deref() {
            input = input.with_initial_text(name);
        }
        let name = input.interact_text()?;

        if name.trim().is_empty() && previous.is_none() {
            return Ok(false);
        }

        match session.set_company(&name) {
            Ok(company) => {
                ctx.output.success(&format!("Quoting for {}", company));
                return Ok(true);
            }
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }
}

async fn execute(command: ShellCommand, session: &mut QuoteSession, ctx: &Context) -> Result<()> {
    match command {
        ShellCommand::Search(query) => {
            let min_len = session.config().search.min_query_len;
            let results = session.search(&query)?;
            if SearchQuery::new(query).with_min_len(min_len).is_searchable() {
                print_results(&results, session, ctx);
            } else {
                ctx.output
                    .info(&format!("Enter at least {} characters to search", min_len));
            }
        }
        ShellCommand::Select(code) => {
            session.toggle_select(&code, true)?;
            ctx.output.info(&session.selection().summary());
        }
        ShellCommand::Unselect(code) => {
            session.toggle_select(&code, false)?;
            ctx.output.info(&session.selection().summary());
        }
        ShellCommand::Qty { code, variant, raw: Some(raw) } => {
            match session.set_variant_quantity(&code, variant, &raw)? {
                Some(qty) => ctx.output.success(&format!("{} {}: {} PCS", code, variant, qty)),
                None => ctx.output.info(&format!("{} {}: no quantity", code, variant)),
            }
            ctx.output.info(&session.selection().summary());
        }
        ShellCommand::Qty { code, variant, raw: None } => {
            session.clear_variant(&code, variant)?;
            ctx.output.info(&format!("{} {}: unchosen", code, variant));
        }
        ShellCommand::List => print_selection(session, ctx),
        ShellCommand::Quote => match session.enter_quote_mode()? {
            Some(items) => print_quote(&items, session, ctx),
            None => ctx.output.warn("Select at least one item first"),
        },
        ShellCommand::Back => match session.exit_quote_mode()? {
            Some(results) => print_results(&results, session, ctx),
            None => ctx.output.info("Back to search"),
        },
        ShellCommand::Clear => {
            let confirmed = session.selection().is_empty()
                || Confirm::new()
                    .with_prompt(format!(
                        "Clear the search and {} selected item(s)?",
                        session.selection().len()
                    ))
                    .default(false)
                    .interact()?;
            if confirmed {
                session.clear_search();
                ctx.output.info(&session.selection().summary());
            }
        }
        ShellCommand::Copy => {
            let text = session.export_text(quote_date(None)?)?;
            match clipboard::copy_text(&text) {
                Ok(()) => ctx.output.success("Copied to clipboard"),
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard write failed");
                    ctx.output
                        .warn("Failed to copy to clipboard. Please select and copy manually.");
                    ctx.output.export_text(&text);
                }
            }
        }
        ShellCommand::Reload => match ctx.load_catalog().await {
            Ok(catalog) => {
                let count = catalog.len();
                session.replace_catalog(catalog);
                ctx.output.success(&format!("Reloaded {} products", count));
            }
            Err(e) => {
                ctx.output.error(&e.to_string());
                ctx.output.warn("Keeping the previously loaded catalog");
            }
        },
        ShellCommand::Help => {
            ctx.output.header("Commands");
            for (usage, about) in HELP {
                ctx.output.kv(usage, about);
            }
        }
        ShellCommand::Company | ShellCommand::Quit => {}
    }

    Ok(())
}

fn print_results(results: &SearchResults, session: &QuoteSession, ctx: &Context) {
    ctx.output
        .header(&format!("Results for '{}' ({} found)", results.query, results.len()));

    if results.is_empty() {
        ctx.output.info("No products found");
        return;
    }

    let currency = session.config().pricing.currency;
    let widths = [3, 16, 44, 14, 12];
    for product in &results.items {
        let entry = session.selection().get(&product.code);
        let mark = if entry.is_some() { "[x]" } else { "[ ]" };
        let finishes = entry
            .map(|e| {
                e.variants
                    .present()
                    .map(|(variant, qty)| format!("{}={}", variant, qty))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        let description = truncate(&product.description, widths[2]);
        let price = product.dealer_price.display(currency);
        ctx.output.table_row(
            &[mark, product.code.as_str(), description.as_str(), price.as_str(), finishes.as_str()],
            &widths,
        );
    }
    ctx.output.info(&session.selection().summary());
}

fn print_selection(session: &QuoteSession, ctx: &Context) {
    ctx.output.header(&session.selection().summary());
    for entry in session.selection().entries() {
        let finishes: Vec<String> = entry
            .variants
            .present()
            .map(|(variant, qty)| format!("{} x{}", variant, qty))
            .collect();
        if finishes.is_empty() {
            ctx.output.list_item(entry.code.as_str());
        } else {
            ctx.output
                .list_item(&format!("{} ({})", entry.code, finishes.join(", ")));
        }
    }
}

fn print_quote(items: &[QuoteLineItem], session: &QuoteSession, ctx: &Context) {
    ctx.output.header(&format!(
        "Quote for {} ({} lines)",
        session.company().unwrap_or_default(),
        items.len()
    ));

    let currency = session.config().pricing.currency;
    let widths = [16, 10, 14];
    for item in items {
        let qty = item.qty.map(|q| format!("{} PCS", q)).unwrap_or_default();
        let price = item.product.dealer_price.display(currency);
        let label = item.code_label();
        ctx.output
            .table_row(&[label.as_str(), qty.as_str(), price.as_str()], &widths);
    }
    ctx.output.info("Type 'copy' to copy the quote, 'back' to return to search");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("quote").unwrap(), Some(ShellCommand::Quote));
        assert_eq!(parse_command("EXIT").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(
            parse_command("select A10-X").unwrap(),
            Some(ShellCommand::Select("A10-X".to_string()))
        );
    }

    #[test]
    fn test_bare_text_searches() {
        assert_eq!(
            parse_command("led panel").unwrap(),
            Some(ShellCommand::Search("led panel".to_string()))
        );
        assert_eq!(
            parse_command("s  a10 ").unwrap(),
            Some(ShellCommand::Search("a10".to_string()))
        );
    }

    #[test]
    fn test_parse_qty() {
        assert_eq!(
            parse_command("qty A10-X dl 5").unwrap(),
            Some(ShellCommand::Qty {
                code: "A10-X".to_string(),
                variant: Variant::Dl,
                raw: Some("5".to_string()),
            })
        );
        assert_eq!(
            parse_command("qty A10-X WW").unwrap(),
            Some(ShellCommand::Qty {
                code: "A10-X".to_string(),
                variant: Variant::Ww,
                raw: None,
            })
        );
        assert!(parse_command("qty A10-X cw 5").is_err());
        assert!(parse_command("qty").is_err());
    }

    #[test]
    fn test_select_requires_code() {
        assert!(parse_command("select").is_err());
        assert!(parse_command("unselect").is_err());
    }
}
