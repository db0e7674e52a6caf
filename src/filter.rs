//! Field-based content filter: reduces an unbounded block of scraped text
//! to the lines relevant to a field of study.

use crate::fields::FieldTable;

/// Lines at or above this trimmed length are not considered headline-like.
const HEADLINE_MAX_CHARS: usize = 100;

/// How much of the original text the synthesized fallback keeps.
const FALLBACK_PREFIX_CHARS: usize = 500;

/// Keep only lines relevant to `field`: lines containing one of the field's
/// keywords (case-insensitive), or headline-like lines (short, starting with
/// an uppercase letter). Retained lines keep their original order.
///
/// Unknown fields pass the text through unchanged. If nothing survives the
/// filter, a synthesized fallback carrying the first 500 chars of the input
/// is returned instead, so non-empty input never filters to nothing.
pub fn filter_by_field(text: &str, field: &str, fields: &FieldTable) -> String {
    let keywords = fields.keywords(field);
    if text.is_empty() || keywords.is_empty() {
        return text.to_string();
    }

    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let relevant: Vec<&str> = text
        .lines()
        .filter(|line| {
            let line_lower = line.to_lowercase();
            if lowered.iter().any(|k| line_lower.contains(k)) {
                return true;
            }
            is_headline_like(line)
        })
        .collect();

    if !relevant.is_empty() {
        return relevant.join("\n");
    }

    // Nothing matched; keep a field-labeled prefix of the original.
    format!(
        "📚 General tech news (filtered for {field}):\n\n{}...",
        truncate_chars(text, FALLBACK_PREFIX_CHARS)
    )
}

/// Heuristic for headline lines: short, non-empty, starts uppercase.
fn is_headline_like(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() < HEADLINE_MAX_CHARS
        && trimmed
            .chars()
            .next()
            .map_or(false, |c| c.is_uppercase())
}

/// Char-boundary-safe prefix.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
