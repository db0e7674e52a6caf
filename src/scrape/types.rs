// src/scrape/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Extraction formats the provider can return for a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Html,
}

/// Default format set for fetches that don't specify one.
pub const DEFAULT_FORMATS: &[OutputFormat] = &[OutputFormat::Markdown, OutputFormat::Html];

/// Structured extraction payload from the provider. Any of the textual
/// fields may be absent depending on the requested formats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredDoc {
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

/// Extracted content, resolved into a closed shape at the fetcher boundary
/// so downstream code never re-derives what the provider sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Payload {
    PlainText(String),
    Structured(StructuredDoc),
}

impl Payload {
    /// Best display text: primary `markdown` field first, then `text`,
    /// then `html`, then a JSON dump as a last resort.
    pub fn display_text(&self) -> String {
        match self {
            Payload::PlainText(s) => s.clone(),
            Payload::Structured(doc) => doc
                .markdown
                .clone()
                .filter(|s| !s.is_empty())
                .or_else(|| doc.text.clone().filter(|s| !s.is_empty()))
                .or_else(|| doc.html.clone().filter(|s| !s.is_empty()))
                .unwrap_or_else(|| serde_json::to_string(doc).unwrap_or_default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Payload::PlainText(s) => s.trim().is_empty(),
            Payload::Structured(doc) => {
                let empty = |f: &Option<String>| f.as_deref().map_or(true, |s| s.trim().is_empty());
                empty(&doc.markdown) && empty(&doc.text) && empty(&doc.html)
            }
        }
    }
}

/// Outcome of one remote fetch attempt. Failure is reserved for
/// transport/provider-level errors; a reachable provider that returned no
/// usable content is a success with empty content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchResult {
    pub success: bool,
    pub url: String,
    pub content: Option<Payload>,
    /// Present iff `success` is false.
    pub error: Option<String>,
}

impl FetchResult {
    pub fn ok(url: impl Into<String>, content: Payload) -> Self {
        Self {
            success: true,
            url: url.into(),
            content: Some(content),
            error: None,
        }
    }

    pub fn err(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: url.into(),
            content: None,
            error: Some(error.into()),
        }
    }

    /// True when the fetch succeeded and carries non-empty content.
    pub fn has_content(&self) -> bool {
        self.success && self.content.as_ref().map_or(false, |p| !p.is_empty())
    }
}

/// External scrape/crawl provider. Implementations return `Err` only for
/// transport/provider-level failures; empty extractions are `Ok`.
///
/// Calls carry no shared mutable state and are safe to run concurrently.
#[async_trait::async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// Extract a single page in the given formats.
    async fn scrape(&self, url: &str, formats: &[OutputFormat]) -> Result<Payload>;

    /// Extract up to `page_limit` linked pages starting at `url`.
    async fn crawl(&self, url: &str, page_limit: u32) -> Result<Payload>;

    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}
