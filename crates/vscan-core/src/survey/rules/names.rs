//! Candidate name normalization and filtering.

use super::patterns::{
    DASH_OR_SPACE_RUN, DATE_ANY, DUE_DATE_PHRASE, DUE_WORD, MARKER_CHARS, NAME_DATE_SHAPES,
    NOT_DUE, TRAILING_DIGITS, TRAILING_DUE, TRAILING_NOT_DUE, WHITESPACE_RUN,
};

/// Strip embedded dates, dash runs and trailing status words from a label.
///
/// The pass is repeated until nothing changes, so `clean_name` is idempotent.
pub fn clean_name(name: &str) -> String {
    let mut current = name.trim().to_string();
    loop {
        let next = clean_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn clean_pass(name: &str) -> String {
    let name = NAME_DATE_SHAPES.replace_all(name, "");
    let name = DASH_OR_SPACE_RUN.replace_all(&name, " ");
    let name = TRAILING_NOT_DUE.replace(name.trim_end(), "");
    let name = TRAILING_DUE.replace(&name, "");
    let name = TRAILING_DIGITS.replace(&name, "$1");
    name.trim().to_string()
}

/// Remove dates, due markers, dash/slash characters and colons from a line.
pub fn strip_markers(line: &str) -> String {
    let text = DUE_DATE_PHRASE.replace_all(line, " ");
    let text = DATE_ANY.replace_all(&text, " ");
    let text = NOT_DUE.replace_all(&text, " ");
    let text = DUE_WORD.replace_all(&text, " ");
    let text = MARKER_CHARS.replace_all(&text, " ");
    collapse_whitespace(&text)
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Whether `name` can be reported as a survey item.
///
/// `ignore_lower` holds lowercased noise phrases; any of them appearing in
/// the name rejects it.
pub fn is_meaningful(name: &str, ignore_lower: &[String]) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.contains("Not") {
        return false;
    }

    let lower = trimmed.to_lowercase();
    if ignore_lower.iter().any(|phrase| lower.contains(phrase.as_str())) {
        return false;
    }

    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c.is_whitespace())
    {
        return false;
    }

    let first_numeric = trimmed
        .split_whitespace()
        .next()
        .is_some_and(|token| token.chars().all(|c| c.is_ascii_digit()));

    !first_numeric
}
