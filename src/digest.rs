//! # Aggregator
//!
//! Orchestrates concurrent fetches across the source registry, filters each
//! source's content for a field of study, and assembles one personalized
//! digest. Exhaustion is not an error: when no source contributes, the
//! result degrades to field-specific (or generic) canned fallback content,
//! so callers always receive something renderable.

use std::sync::Arc;

use futures::future::join_all;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::fields::FieldTable;
use crate::filter::{filter_by_field, truncate_chars};
use crate::scrape::types::{FetchResult, ScrapeProvider};
use crate::scrape::Fetcher;
use crate::sources::{Source, SourceRegistry};

/// Minimum trimmed length of filtered text for a source to contribute.
const MIN_CONTRIBUTION_CHARS: usize = 50;

/// Per-source excerpt cap inside the digest.
const EXCERPT_MAX_CHARS: usize = 300;

/// The one error class surfaced to callers: bad caller input. Fetch and
/// provider failures never take this path; they are data in `FetchResult`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("unknown news source: {0}")]
    UnknownSource(String),
}

/// Per-source fan-out slot: the source paired with its own fetch outcome.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub source: Source,
    pub result: FetchResult,
}

/// Outcome of a personalization request. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregationResult {
    pub success: bool,
    pub field: Option<String>,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl AggregationResult {
    fn ok(field: Option<String>, content: String) -> Self {
        Self {
            success: true,
            field,
            content: Some(content),
            error: None,
        }
    }
}

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "digest_requests_total",
            "Personalization requests processed."
        );
        describe_counter!(
            "digest_contributing_sources_total",
            "Sources whose filtered content made it into a digest."
        );
        describe_counter!(
            "digest_fallback_total",
            "Personalization requests resolved with canned fallback content."
        );
    });
}

/// Multi-source news aggregator. The scrape provider is injected at
/// construction so tests can substitute a double; no ambient global.
pub struct Aggregator {
    registry: SourceRegistry,
    fields: FieldTable,
    fetcher: Fetcher,
}

impl Aggregator {
    pub fn new(
        registry: SourceRegistry,
        fields: FieldTable,
        provider: Arc<dyn ScrapeProvider>,
    ) -> Self {
        ensure_metrics_described();
        Self {
            registry,
            fields,
            fetcher: Fetcher::new(provider),
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// Crawl every registered source concurrently. Each source's failure is
    /// recorded in its own slot and cannot abort the others. The returned
    /// vector is in registry order regardless of completion order.
    pub async fn fetch_all_sources(&self, per_source_limit: u32) -> Vec<SourceOutcome> {
        let fetches = self.registry.iter().map(|source| async {
            let result = self.fetcher.crawl_site(&source.url, per_source_limit).await;
            SourceOutcome {
                source: source.clone(),
                result,
            }
        });
        // join_all preserves input order, which is registry order.
        join_all(fetches).await
    }

    /// Build a personalized digest for `field`.
    ///
    /// Total by design: never errors and never returns `success=false`.
    /// Zero contributing sources resolves to the field's canned fallback,
    /// or the generic fallback when the field is unknown or empty.
    pub async fn personalize(&self, field: &str, per_source_limit: u32) -> AggregationResult {
        counter!("digest_requests_total").increment(1);

        let outcomes = self.fetch_all_sources(per_source_limit).await;
        match self.assemble_digest(&outcomes, field) {
            Some(digest) => AggregationResult::ok(Some(field.to_string()), digest),
            None => self.fallback_for_field(field),
        }
    }

    /// Merge filtered per-source content into one digest body, or `None`
    /// when no source contributes.
    fn assemble_digest(&self, outcomes: &[SourceOutcome], field: &str) -> Option<String> {
        let emoji = self.fields.emoji_for(field);
        let mut parts = vec![format!("{emoji} Personalized News for {field}\n")];
        let mut contributors = 0usize;

        for outcome in outcomes {
            if !outcome.result.has_content() {
                continue;
            }
            let raw = outcome
                .result
                .content
                .as_ref()
                .map(|p| p.display_text())
                .unwrap_or_default();

            let filtered = filter_by_field(&raw, field, &self.fields);
            if filtered.trim().chars().count() <= MIN_CONTRIBUTION_CHARS {
                continue;
            }

            parts.push(format!("\n🔗 From {}:", outcome.source.name));
            if filtered.chars().count() > EXCERPT_MAX_CHARS {
                parts.push(format!(
                    "{}...",
                    truncate_chars(&filtered, EXCERPT_MAX_CHARS)
                ));
            } else {
                parts.push(filtered);
            }
            contributors += 1;
            tracing::debug!(target: "digest", source = %outcome.source.id, "source contributed");
        }

        if contributors == 0 {
            return None;
        }
        counter!("digest_contributing_sources_total").increment(contributors as u64);
        Some(parts.join("\n"))
    }

    /// Canned fallback result for `field` (generic when unknown/empty).
    fn fallback_for_field(&self, field: &str) -> AggregationResult {
        counter!("digest_fallback_total").increment(1);
        tracing::info!(target: "digest", field, "no contributing sources, serving fallback");
        let field_opt = (!field.is_empty()).then(|| field.to_string());
        AggregationResult::ok(field_opt, self.fields.fallback_for(field))
    }

    /// Bounded crawl of one registered source. Fails eagerly and distinctly
    /// for unknown ids; fetch-level failures still come back as data.
    pub async fn single_source(&self, id: &str, limit: u32) -> Result<FetchResult, DigestError> {
        let source = self
            .registry
            .get(id)
            .ok_or_else(|| DigestError::UnknownSource(id.to_string()))?;
        Ok(self.fetcher.crawl_site(&source.url, limit).await)
    }

    /// Generic, no-parameter fetch path: bounded crawl of the default
    /// (first) registry source.
    pub async fn front_page(&self, limit: u32) -> FetchResult {
        match self.registry.default_source() {
            Some(source) => self.fetcher.crawl_site(&source.url, limit).await,
            None => FetchResult::err("", "no sources registered"),
        }
    }
}
