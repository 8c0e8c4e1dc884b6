// src/formatter/exercise.rs
// Exercise list → HTML fragment with highlighted attribute labels

use super::{split_trimmed, strip_role_labels};
use regex::Regex;
use std::sync::LazyLock;

const LINE_BREAK: &str = "<br>";
const BLOCK_BREAK: &str = "<br><br>";

/// Instruction line some models echo ahead of the answer
static LEAKED_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^💪.*Do not use any formatting.*\n?").expect("valid regex")
});
static EXERCISE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}|\d+\.\s*").expect("valid regex"));
static ATTRIBUTE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Name|Type|Duration|How to do it|Intensity)\s*:").expect("valid regex")
});

fn highlight(line: &str) -> String {
    if ATTRIBUTE_LABEL.is_match(line) {
        format!(r#"<span class="highlight">{}</span>"#, line)
    } else {
        line.to_string()
    }
}

/// Exercises separated by blank lines or numbering, one attribute per line.
///
/// Model text is inserted as-is; the frontend renders it with `innerHTML`.
pub fn format_exercise(raw: &str) -> String {
    let cleaned = strip_role_labels(raw);
    let cleaned = LEAKED_INSTRUCTION.replace(&cleaned, "");

    split_trimmed(&EXERCISE_SPLIT, &cleaned)
        .into_iter()
        .map(|block| {
            block
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(highlight)
                .collect::<Vec<_>>()
                .join(LINE_BREAK)
        })
        .collect::<Vec<_>>()
        .join(BLOCK_BREAK)
}
