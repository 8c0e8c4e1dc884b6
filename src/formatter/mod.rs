// src/formatter/mod.rs
// Per-endpoint cleanup of raw model text into the shapes the frontend renders
//
// These are heuristics, not parsers. When the model ignores the requested
// layout the output degrades (too many or too few lines) instead of failing.

mod exercise;
mod insights;
mod text;

pub use exercise::format_exercise;
pub use insights::{IMPROVEMENT_HEADER, INSIGHTS_HEADER, format_insights};
pub use text::{
    format_chat, format_diagnosis, format_remedies, format_tip_lines, format_tips,
    format_treatment,
};

use regex::Regex;

/// Chat role labels models like to echo back
const ROLE_LABELS: &[&str] = &["Assistant:", "User:"];

/// Remove role labels, then trim
pub fn strip_role_labels(raw: &str) -> String {
    remove_all(raw, ROLE_LABELS).trim().to_string()
}

/// Delete every occurrence of each needle, repeating until nothing changes
/// so a removal can't splice a new occurrence together.
fn remove_all(text: &str, needles: &[&str]) -> String {
    let mut out = text.to_string();
    loop {
        let before = out.len();
        for needle in needles {
            out = out.replace(needle, "");
        }
        if out.len() == before {
            return out;
        }
    }
}

/// Split on a delimiter pattern, trimming pieces and dropping empty ones
fn split_trimmed<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    pattern
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
