//! Presenter: turns aggregation/fetch results into bounded display strings.
//! Pure functions only; transport chunking beyond `max_len` is the caller's
//! problem.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::digest::AggregationResult;
use crate::scrape::types::FetchResult;

pub const DEFAULT_MAX_LEN: usize = 4000;

const HEADER: &str = "📰 Latest Tech News:\n\n";
const NO_CONTENT: &str = "📰 No news content available";
const ELLIPSIS: &str = "...";

/// Anything the presenter can render: a success flag, an optional error
/// message, and an optional display body.
pub trait Renderable {
    fn succeeded(&self) -> bool;
    fn error_message(&self) -> Option<&str>;
    fn display_text(&self) -> Option<String>;
}

impl Renderable for FetchResult {
    fn succeeded(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
    fn display_text(&self) -> Option<String> {
        self.content.as_ref().map(|p| p.display_text())
    }
}

impl Renderable for AggregationResult {
    fn succeeded(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
    fn display_text(&self) -> Option<String> {
        self.content.clone()
    }
}

/// Render a result into a display message no longer than `max_len` chars.
///
/// Failures render as a single error line; successes without content render
/// a fixed no-content string; otherwise the body is cleaned up and truncated
/// (char-boundary safe) under a fixed header.
pub fn render<R: Renderable>(result: &R, max_len: usize) -> String {
    if !result.succeeded() {
        return format!(
            "❌ Error fetching news: {}",
            result.error_message().unwrap_or("Unknown error")
        );
    }

    let body = match result.display_text() {
        Some(s) if !s.trim().is_empty() => s,
        _ => return NO_CONTENT.to_string(),
    };

    let cleaned = clean_content(&body);
    if cleaned.trim().is_empty() {
        return NO_CONTENT.to_string();
    }

    let header_len = HEADER.chars().count();
    let budget = max_len.saturating_sub(header_len);
    let mut message = String::from(HEADER);

    if cleaned.chars().count() > budget {
        let cut = budget.saturating_sub(ELLIPSIS.chars().count());
        message.push_str(crate::filter::truncate_chars(&cleaned, cut));
        message.push_str(ELLIPSIS);
    } else {
        message.push_str(&cleaned);
    }
    message
}

/// Render with the default 4000-char bound.
pub fn render_default<R: Renderable>(result: &R) -> String {
    render(result, DEFAULT_MAX_LEN)
}

/// Cleanup for scraped text: collapse blank-line runs and horizontal
/// whitespace, and drop pure navigation boilerplate lines.
pub fn clean_content(content: &str) -> String {
    static RE_NEWLINES: OnceCell<Regex> = OnceCell::new();
    static RE_HSPACE: OnceCell<Regex> = OnceCell::new();
    static RE_NAV: OnceCell<Regex> = OnceCell::new();

    let re_newlines = RE_NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("newline regex"));
    let re_hspace = RE_HSPACE.get_or_init(|| Regex::new(r"[ \t]+").expect("hspace regex"));
    let re_nav = RE_NAV.get_or_init(|| {
        Regex::new(r"(?i)^\s*((skip|jump|go) to (main )?content|menu|navigation|header|footer)\s*$")
            .expect("nav regex")
    });

    let out = re_newlines.replace_all(content, "\n\n");
    let out = re_hspace.replace_all(&out, " ");

    let kept: Vec<&str> = out.lines().filter(|l| !re_nav.is_match(l)).collect();
    kept.join("\n").trim().to_string()
}
