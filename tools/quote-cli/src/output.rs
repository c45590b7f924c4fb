//! Output formatting for the CLI.
//!
//! Status lines are suppressed in `--json` mode so stdout carries only
//! the JSON document. Warnings, errors and debug lines go to stderr.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Level::Info => style("ℹ").blue(),
            Level::Success => style("✓").green(),
            Level::Warn => style("⚠").yellow(),
            Level::Error => style("✗").red(),
            Level::Debug => style("→").dim(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warn | Level::Error | Level::Debug)
    }
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.status(Level::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(Level::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(Level::Warn, msg);
    }

    /// Print an error. In JSON mode this is an `{"error": ...}` object on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.status(Level::Error, msg);
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(Level::Debug, msg);
        }
    }

    fn status(&self, level: Level, msg: &str) {
        if self.json {
            return;
        }
        let text = match level {
            Level::Error => style(msg).red().to_string(),
            Level::Debug => style(msg).dim().to_string(),
            _ => msg.to_string(),
        };
        if level.to_stderr() {
            eprintln!("{} {}", level.marker(), text);
        } else {
            println!("{} {}", level.marker(), text);
        }
    }

    /// Print a plain stdout line unless in JSON mode.
    fn line(&self, text: impl std::fmt::Display) {
        if !self.json {
            println!("{}", text);
        }
    }

    pub fn header(&self, msg: &str) {
        self.line(format_args!("\n{}", style(msg).bold().underlined()));
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.line(format_args!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.line(format_args!("  {} {}", style("•").dim(), item));
    }

    /// Print one row padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.line(format_args!("  {}", pad_row(cols, widths)));
    }

    /// Print export text verbatim, framed by blank lines.
    pub fn export_text(&self, text: &str) {
        self.line(format_args!("\n{}\n", text));
    }

    /// Pretty-print a value as JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize JSON output"),
        }
    }

    /// Spinner for catalog loading; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Join cells padded to their column widths.
fn pad_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths)
        .map(|(col, &width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Truncate a cell to `width` characters for table output.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
    }

    #[test]
    fn test_pad_row() {
        assert_eq!(pad_row(&["A10", "x"], &[5, 2]), "A10    x ");
    }

    #[test]
    fn test_stream_per_level() {
        assert!(!Level::Info.to_stderr());
        assert!(!Level::Success.to_stderr());
        assert!(Level::Warn.to_stderr());
        assert!(Level::Error.to_stderr());
        assert!(Level::Debug.to_stderr());
    }
}
