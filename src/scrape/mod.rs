// src/scrape/mod.rs
pub mod providers;
pub mod types;

use std::sync::Arc;

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::scrape::types::{FetchResult, OutputFormat, ScrapeProvider, DEFAULT_FORMATS};

/// One-time metrics registration (so series show up on scrape counters).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("scrape_requests_total", "Single-page scrape attempts.");
        describe_counter!("scrape_failures_total", "Single-page scrape failures.");
        describe_counter!("crawl_requests_total", "Multi-page crawl attempts.");
        describe_counter!("crawl_failures_total", "Crawls that failed outright.");
        describe_counter!(
            "crawl_fallback_total",
            "Crawls degraded to a single-page scrape."
        );
    });
}

/// Remote fetcher over an injected scrape/crawl provider.
///
/// All failures are converted to data here: callers receive a `FetchResult`
/// and never an `Err`. Calls share no mutable state and may run concurrently.
#[derive(Clone)]
pub struct Fetcher {
    provider: Arc<dyn ScrapeProvider>,
}

impl Fetcher {
    pub fn new(provider: Arc<dyn ScrapeProvider>) -> Self {
        ensure_metrics_described();
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Extract a single page in the given formats (default: markdown+html).
    pub async fn scrape_page(&self, url: &str, formats: Option<&[OutputFormat]>) -> FetchResult {
        let formats = formats.unwrap_or(DEFAULT_FORMATS);
        counter!("scrape_requests_total").increment(1);
        match self.provider.scrape(url, formats).await {
            Ok(payload) => FetchResult::ok(url, payload),
            Err(e) => {
                tracing::warn!(target: "scrape", url, error = %e, "scrape failed");
                counter!("scrape_failures_total").increment(1);
                FetchResult::err(url, e.to_string())
            }
        }
    }

    /// Extract up to `page_limit` linked pages starting at `url`.
    ///
    /// On crawl failure, degrades to exactly one single-page scrape. If that
    /// also fails, the returned failure carries the crawl's error message,
    /// which has more diagnostic value than the fallback's.
    pub async fn crawl_site(&self, url: &str, page_limit: u32) -> FetchResult {
        counter!("crawl_requests_total").increment(1);
        let crawl_err = match self.provider.crawl(url, page_limit).await {
            Ok(payload) => return FetchResult::ok(url, payload),
            Err(e) => e,
        };

        tracing::warn!(target: "scrape", url, error = %crawl_err, "crawl failed, trying single-page scrape");
        counter!("crawl_fallback_total").increment(1);

        let fallback = self.scrape_page(url, None).await;
        if fallback.success {
            return fallback;
        }

        tracing::error!(target: "scrape", url, error = %crawl_err, "fallback scrape also failed");
        counter!("crawl_failures_total").increment(1);
        FetchResult::err(url, crawl_err.to_string())
    }
}
