//! Description normalization for exported text.
//!
//! Catalog descriptions embed finish names and warranty text in varying
//! forms, e.g. `Recessed Downlight Daylight/Cool White 1 year warranty`.
//! The export form drops the finish list and moves a compact warranty note
//! to the end: `Recessed Downlight (1yr warranty)`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Finish tokens (optionally `/`-joined) followed by a warranty clause.
static FINISH_WARRANTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s*(?:(?:Daylight|Cool\s+White|Warm\s+White|White)/?)+\s*([0-9]+)\s*years?\s+warranty",
    )
    .expect("finish warranty pattern")
});

/// A bare warranty clause.
static WARRANTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*([0-9]+)\s*years?\s+warranty").expect("warranty pattern")
});

/// Warranty assumed when a description does not state one.
const DEFAULT_WARRANTY_YEARS: &str = "1";

/// Normalize a description for export.
pub fn normalize_description(description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        return warranty_note(DEFAULT_WARRANTY_YEARS);
    }

    for pattern in [&*FINISH_WARRANTY, &*WARRANTY] {
        if let Some(caps) = pattern.captures(description) {
            let (Some(clause), Some(years)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let rest = format!(
                "{}{}",
                &description[..clause.start()],
                &description[clause.end()..]
            );
            return with_warranty(rest.trim(), years.as_str());
        }
    }

    with_warranty(description, DEFAULT_WARRANTY_YEARS)
}

fn with_warranty(text: &str, years: &str) -> String {
    if text.is_empty() {
        warranty_note(years)
    } else {
        format!("{} {}", text, warranty_note(years))
    }
}

fn warranty_note(years: &str) -> String {
    if years == "1" {
        "(1yr warranty)".to_string()
    } else {
        format!("({}yrs warranty)", years)
    }
}
