// src/formatter/text.rs
// Plain-text formatters: diagnosis, remedies, chat, treatment, daily tips

use super::{remove_all, split_trimmed, strip_role_labels};
use regex::Regex;
use std::sync::LazyLock;

const BULLET: &str = "•";

/// Labels the diagnosis prompt's placeholders leak into answers
const DIAGNOSIS_NOISE: &[&str] = &["Assistant:", "User:", "Explanation point", "Explanation"];

static DIAGNOSIS_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|•|- ").expect("valid regex"));
static REMEDY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*|\n").expect("valid regex"));
static TIP_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*\-•👉]+").expect("valid regex"));
static TIP_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n|,").expect("valid regex"));

/// One point per line: the disease line followed by its explanations
pub fn format_diagnosis(raw: &str) -> String {
    let cleaned = remove_all(raw, DIAGNOSIS_NOISE);
    split_trimmed(&DIAGNOSIS_SPLIT, cleaned.trim()).join("\n")
}

/// Numbered list → bulleted lines
pub fn format_remedies(raw: &str) -> String {
    split_trimmed(&REMEDY_SPLIT, raw)
        .into_iter()
        .map(|item| item.trim_start_matches(BULLET).trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("{} {}", BULLET, item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_chat(raw: &str) -> String {
    strip_role_labels(raw)
}

pub fn format_treatment(raw: &str) -> String {
    strip_role_labels(raw)
}

/// Glyph-free tips, one per line, each indented by a single space
pub fn format_tips(raw: &str) -> String {
    let cleaned = TIP_GLYPHS.replace_all(raw, "");
    split_trimmed(&TIP_SPLIT, &cleaned)
        .into_iter()
        .map(|tip| format!(" {}", tip))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tips that arrived already split into lines
pub fn format_tip_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    format_tips(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Diagnosis
    // ========================================================================

    #[test]
    fn test_diagnosis_dash_list() {
        let raw = "Assistant: - Disease: Flu\n- Fever\n- Cough\n- Fatigue";
        assert_eq!(format_diagnosis(raw), "Disease: Flu\nFever\nCough\nFatigue");
    }

    #[test]
    fn test_diagnosis_strips_explanation_labels() {
        let raw = "- Disease: Migraine\n- Explanation point 1: throbbing pain\n• Explanation: light sensitivity";
        assert_eq!(
            format_diagnosis(raw),
            "Disease: Migraine\n1: throbbing pain\n: light sensitivity"
        );
    }

    #[test]
    fn test_diagnosis_no_line_starts_with_explanation() {
        let raw = "User: Explanation\nExplanationExplanation point\n- EExplanationxplanation matters";
        let out = format_diagnosis(raw);
        assert!(out.lines().all(|l| !l.starts_with("Explanation")));
        assert!(!out.contains("User:"));
        assert!(!out.contains("Assistant:"));
    }

    #[test]
    fn test_diagnosis_empty_input() {
        assert_eq!(format_diagnosis("   \n  "), "");
    }

    #[test]
    fn test_diagnosis_idempotent() {
        let once = format_diagnosis("Disease: Cold\nRunny nose\nSneezing");
        assert_eq!(format_diagnosis(&once), once);
    }

    // ========================================================================
    // Remedies
    // ========================================================================

    #[test]
    fn test_remedies_numbered_list() {
        let raw = "1. Honey\n2. Ginger tea\n3. Rest";
        assert_eq!(format_remedies(raw), "• Honey\n• Ginger tea\n• Rest");
    }

    #[test]
    fn test_remedies_inline_numbering() {
        let raw = "1. Honey 2. Lemon water 10. Steam";
        assert_eq!(format_remedies(raw), "• Honey\n• Lemon water\n• Steam");
    }

    #[test]
    fn test_remedies_every_line_bulleted() {
        let raw = "Here are some remedies:\n1. Turmeric milk\nGarlic\n2.Warm compress";
        let out = format_remedies(raw);
        assert!(out.lines().all(|l| l.starts_with("• ")));
        assert!(!out.contains("1."));
        assert!(!out.contains("2."));
    }

    #[test]
    fn test_remedies_existing_bullets_not_doubled() {
        assert_eq!(format_remedies("• Honey\n• Rest"), "• Honey\n• Rest");
    }

    #[test]
    fn test_remedies_idempotent() {
        let once = format_remedies("Chamomile tea");
        assert_eq!(once, "• Chamomile tea");
        assert_eq!(format_remedies(&once), once);
    }

    #[test]
    fn test_remedies_empty() {
        assert_eq!(format_remedies(""), "");
    }

    // ========================================================================
    // Chat / treatment
    // ========================================================================

    #[test]
    fn test_chat_strips_labels_only() {
        let raw = "Assistant: Yes - in moderation.\n1. Coffee is fine";
        assert_eq!(format_chat(raw), "Yes - in moderation.\n1. Coffee is fine");
    }

    #[test]
    fn test_treatment_keeps_sections() {
        let raw = "**Medications:**\n- Ibuprofen\n**Lifestyle changes:**\n- Rest\nUser:";
        assert_eq!(
            format_treatment(raw),
            "**Medications:**\n- Ibuprofen\n**Lifestyle changes:**\n- Rest"
        );
    }

    // ========================================================================
    // Tips
    // ========================================================================

    #[test]
    fn test_tips_strip_glyphs() {
        let raw = "* Try to eat a fruit for breakfast\n- Walk daily\n• Sleep 8 hours\n👉 Drink juices";
        assert_eq!(
            format_tips(raw),
            " Try to eat a fruit for breakfast\n Walk daily\n Sleep 8 hours\n Drink juices"
        );
    }

    #[test]
    fn test_tips_split_on_commas() {
        assert_eq!(format_tips("Stretch, hydrate,  smile"), " Stretch\n hydrate\n smile");
    }

    #[test]
    fn test_tips_remove_hyphens_inside_words() {
        assert_eq!(format_tips("Eat high-fiber food"), " Eat highfiber food");
    }

    #[test]
    fn test_tips_no_glyphs_remain() {
        let out = format_tips("**Bold** tip\n-- dashes --\n•• 👉👉 pointers");
        for glyph in ['*', '-', '•', '👉'] {
            assert!(!out.contains(glyph), "found {:?} in {:?}", glyph, out);
        }
    }

    #[test]
    fn test_tips_idempotent() {
        let once = format_tips("Drink water\nSleep well");
        assert_eq!(format_tips(&once), once);
    }

    #[test]
    fn test_tip_lines_joined() {
        let lines = vec!["- Walk".to_string(), "* Rest".to_string()];
        assert_eq!(format_tip_lines(&lines), " Walk\n Rest");
    }
}
