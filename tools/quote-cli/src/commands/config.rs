//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let quote = &ctx.config.quote;

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);

    ctx.output.info("[selection]");
    ctx.output.kv("mode", quote.selection.mode.as_str());
    ctx.output
        .kv("max_items", &quote.selection.effective_max_items().to_string());

    ctx.output.info("[pricing]");
    ctx.output.kv(
        "currency",
        &format!(
            "{} ({})",
            quote.pricing.currency.code(),
            quote.pricing.currency.symbol()
        ),
    );

    ctx.output.info("[search]");
    ctx.output
        .kv("min_query_len", &quote.search.min_query_len.to_string());

    ctx.output.info("[export]");
    ctx.output.kv("disclaimer", &quote.export.disclaimer);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("quote.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.quote.validate();
    let mut warnings: Vec<String> = Vec::new();

    let catalog_path = ctx.catalog_path();
    if !catalog_path.exists() {
        warnings.push(format!(
            "catalog.path '{}' does not exist",
            catalog_path.display()
        ));
    }

    let quote = &ctx.config.quote;
    if let Some(max) = quote.selection.max_items {
        let default = quote.selection.mode.default_max_items();
        if max > default {
            warnings.push(format!(
                "selection.max_items {} is above the {} mode default of {}",
                max,
                quote.selection.mode.as_str(),
                default
            ));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
