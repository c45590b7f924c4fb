//! Build a quote from item specs.

use anyhow::{bail, Result};
use quote_core::prelude::*;

use super::{quote_date, BuildArgs};
use crate::clipboard;
use crate::context::Context;

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub code: String,
    /// Raw quantity input per variant, in the order given.
    pub quantities: Vec<(Variant, String)>,
}

/// Parse `CODE`, `CODE:dl=N`, `CODE:ww=N` or `CODE:dl=N,ww=N`.
pub fn parse_item_spec(spec: &str) -> Result<ItemSpec> {
    let (code, rest) = match spec.split_once(':') {
        Some((code, rest)) => (code.trim(), Some(rest)),
        None => (spec.trim(), None),
    };

    if code.is_empty() {
        bail!("Item '{}' has no product code", spec);
    }

    let mut quantities = Vec::new();
    for part in rest.into_iter().flat_map(|r| r.split(',')) {
        let Some((key, value)) = part.split_once('=') else {
            bail!("Expected VARIANT=QTY in '{}', got '{}'", spec, part);
        };
        let Some(variant) = Variant::from_str(key) else {
            bail!("Unknown variant '{}' in '{}' (use dl or ww)", key.trim(), spec);
        };
        quantities.push((variant, value.trim().to_string()));
    }

    Ok(ItemSpec {
        code: code.to_string(),
        quantities,
    })
}

/// Run the build command.
pub async fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let specs = args
        .items
        .iter()
        .map(|s| parse_item_spec(s))
        .collect::<Result<Vec<_>>>()?;
    let date = quote_date(args.date.as_deref())?;

    let catalog = ctx.load_catalog().await?;
    let mut session = QuoteSession::new(catalog, ctx.config.quote.clone());
    session.set_company(&args.company)?;

    for spec in &specs {
        if spec.quantities.is_empty() {
            session.toggle_select(&spec.code, true)?;
            continue;
        }
        for (variant, raw) in &spec.quantities {
            let stored = session.set_variant_quantity(&spec.code, *variant, raw)?;
            if stored.is_none() {
                ctx.output.warn(&format!(
                    "Ignoring {} quantity '{}' for {}",
                    variant, raw, spec.code
                ));
            }
        }
    }

    ctx.output.debug(&session.selection().summary());

    let Some(items) = session.enter_quote_mode()? else {
        bail!("No items selected");
    };
    let text = session.export_text(date)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "company": session.company(),
            "items": items,
            "text": text,
        }));
    } else {
        ctx.output.header(&format!(
            "Quote for {} ({} lines)",
            session.company().unwrap_or_default(),
            items.len()
        ));
        ctx.output.export_text(&text);
    }

    if args.copy {
        match clipboard::copy_text(&text) {
            Ok(()) => ctx.output.success("Copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                ctx.output
                    .warn("Failed to copy to clipboard. Please select and copy manually.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_code() {
        let spec = parse_item_spec(" PNL-A10 ").unwrap();
        assert_eq!(spec.code, "PNL-A10");
        assert!(spec.quantities.is_empty());
    }

    #[test]
    fn test_parse_variants() {
        let spec = parse_item_spec("A10-X:dl=5,WW=2").unwrap();
        assert_eq!(spec.code, "A10-X");
        assert_eq!(
            spec.quantities,
            vec![(Variant::Dl, "5".to_string()), (Variant::Ww, "2".to_string())]
        );
    }

    #[test]
    fn test_parse_rejects_bad_specs() {
        assert!(parse_item_spec(":dl=5").is_err());
        assert!(parse_item_spec("A10:dl").is_err());
        assert!(parse_item_spec("A10:cw=3").is_err());
    }

    #[test]
    fn test_specs_drive_session() {
        let catalog = Catalog::from_json_str(
            r#"[{"code": "A10-X", "description": "Downlight", "dealerPrice": "450.00"},
                {"code": "B20", "description": "Bulb", "dealerPrice": "85.50"}]"#,
        )
        .unwrap();
        let mut session = QuoteSession::new(catalog, QuoteConfig::default());
        session.set_company("acme").unwrap();

        for raw in ["a10-x:ww=3", "B20"] {
            let spec = parse_item_spec(raw).unwrap();
            if spec.quantities.is_empty() {
                session.toggle_select(&spec.code, true).unwrap();
            }
            for (variant, qty) in &spec.quantities {
                session.set_variant_quantity(&spec.code, *variant, qty).unwrap();
            }
        }

        let items = session.enter_quote_mode().unwrap().unwrap();
        let labels: Vec<String> = items.iter().map(|i| i.code_label()).collect();
        assert_eq!(labels, vec!["A10-X-WW", "B20"]);
    }
}
