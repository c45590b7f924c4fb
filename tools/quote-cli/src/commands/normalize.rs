//! Show the export form of a description.

use anyhow::Result;
use quote_core::format::normalize_description;

use super::NormalizeArgs;
use crate::context::Context;

/// Run the normalize command.
pub async fn run(args: NormalizeArgs, ctx: &Context) -> Result<()> {
    let normalized = normalize_description(&args.description);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "input": args.description,
            "normalized": normalized,
        }));
    } else {
        println!("{}", normalized);
    }

    Ok(())
}
