//! Canonical text sample used for ratio analysis and the statistical model.
//!
//! The steps run in a fixed order and each one sees the output of the
//! previous one:
//!
//! 1. line breaks (`\r`, `\n`) are removed outright,
//! 2. tabs are removed,
//! 3. every non-overlapping pair of spaces is removed (a run of three spaces
//!    leaves one),
//! 4. characters in general categories P* and S* are dropped,
//! 5. the first `budget` characters are kept,
//! 6. surrounding whitespace is trimmed.
//!
//! Removing line breaks without inserting a space keeps CJK runs intact; for
//! Latin text it merges words across lines, which the ratio checks tolerate.

use std::borrow::Cow;

use crate::unicode::{is_line_break, is_sign};

/// Normalize a raw sample and bound it to `budget` characters.
pub fn normalize_sample(raw: &str, budget: usize) -> String {
    let flat: String = raw
        .chars()
        .filter(|&c| !is_line_break(c) && c != '\t')
        .collect();
    let collapsed = flat.replace("  ", "");

    let bounded: String = collapsed
        .chars()
        .filter(|&c| !is_sign(c))
        .take(budget)
        .collect();

    let trimmed = bounded.trim();
    if trimmed.len() == bounded.len() {
        bounded
    } else {
        trimmed.to_string()
    }
}

/// Drop punctuation and symbols, then trim. Zero-copy when nothing changes.
pub fn strip_signs(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_sign) {
        return Cow::Borrowed(text.trim());
    }
    let stripped: String = text.chars().filter(|&c| !is_sign(c)).collect();
    Cow::Owned(stripped.trim().to_string())
}
