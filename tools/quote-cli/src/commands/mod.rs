//! CLI command implementations.

pub mod build;
pub mod config;
pub mod normalize;
pub mod search;
pub mod shell;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Code or description fragment.
    pub query: String,

    /// Show only the first N results.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print the copy-paste text for these results under this company.
    #[arg(long)]
    pub company: Option<String>,
}

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Company the quote is for.
    #[arg(short = 'C', long)]
    pub company: String,

    /// Item to quote: `CODE`, `CODE:dl=N`, `CODE:ww=N` or `CODE:dl=N,ww=N`.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Copy the quote to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Validity date (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Company name (prompted for when omitted).
    #[arg(short = 'C', long)]
    pub company: Option<String>,
}

/// Arguments for the normalize command.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw product description.
    pub description: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration.
    Validate,
}

/// Parse `--date`, defaulting to today.
pub(crate) fn quote_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Ok(date),
            Err(_) => bail!("Invalid date '{}', expected YYYY-MM-DD", raw),
        },
        None => Ok(chrono::Local::now().date_naive()),
    }
}
