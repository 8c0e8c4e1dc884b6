// src/formatter/insights.rs
// Vitals insights: section headers re-emitted in bold, everything else bulleted

use super::{split_trimmed, strip_role_labels};
use regex::Regex;
use std::sync::LazyLock;

pub const INSIGHTS_HEADER: &str = "**Potential health insights:**";
pub const IMPROVEMENT_HEADER: &str = "**Improvement recommendations:**";

static INSIGHT_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|,|- ").expect("valid regex"));

/// Ordered lines for the insights panel.
///
/// Header detection is a substring match, so a header the model decorated
/// (`### Potential health insights`) is still normalized.
pub fn format_insights(raw: &str) -> Vec<String> {
    let cleaned = strip_role_labels(raw);
    split_trimmed(&INSIGHT_SPLIT, &cleaned)
        .into_iter()
        .map(|line| {
            if line.contains("Potential health insights") {
                INSIGHTS_HEADER.to_string()
            } else if line.contains("Improvement recommendations") {
                IMPROVEMENT_HEADER.to_string()
            } else {
                format!("- {}", line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_answer() {
        let raw = "Assistant: **Potential health insights:**\n\
                   - Heart rate is slightly elevated\n\
                   - Glucose is in the normal range\n\
                   **Improvement recommendations:**\n\
                   - Walk 30 minutes daily\n\
                   - Reduce sodium\n\
                   - Sleep 7-8 hours";
        assert_eq!(
            format_insights(raw),
            vec![
                INSIGHTS_HEADER,
                "- Heart rate is slightly elevated",
                "- Glucose is in the normal range",
                IMPROVEMENT_HEADER,
                "- Walk 30 minutes daily",
                "- Reduce sodium",
                "- Sleep 7-8 hours",
            ]
        );
    }

    #[test]
    fn test_commas_split_lines() {
        let raw = "Potential health insights: stable, healthy";
        assert_eq!(
            format_insights(raw),
            vec![INSIGHTS_HEADER, "- healthy"]
        );
    }

    #[test]
    fn test_decorated_headers_normalized() {
        let raw = "### Improvement recommendations\nDrink water";
        assert_eq!(format_insights(raw), vec![IMPROVEMENT_HEADER, "- Drink water"]);
    }

    #[test]
    fn test_unstructured_answer_degrades_to_bullets() {
        let raw = "Your numbers look fine";
        assert_eq!(format_insights(raw), vec!["- Your numbers look fine"]);
    }

    #[test]
    fn test_empty_answer() {
        assert!(format_insights("User:").is_empty());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = format_insights("**Potential health insights:**\n- Rest more");
        let rerun = format_insights(&once.join("\n"));
        assert_eq!(rerun, once);
    }
}
