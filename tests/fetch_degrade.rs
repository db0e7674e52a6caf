// Fetcher degrade path: crawl → one scrape fallback → data-shaped failure.

mod common;

use std::sync::Arc;

use common::{Script, ScriptedProvider};
use tech_news_digest::{Fetcher, Payload};

const URL: &str = "https://news.example.com/";

#[tokio::test]
async fn crawl_failure_degrades_to_scrape_content() {
    let provider = ScriptedProvider::new().with_script(
        URL,
        Script::crawl_fails_scrape_ok("crawl quota exceeded", "Fresh headline body"),
    );
    let fetcher = Fetcher::new(Arc::new(provider));

    let result = fetcher.crawl_site(URL, 5).await;
    assert!(result.success);
    assert_eq!(result.error, None);
    assert_eq!(
        result.content,
        Some(Payload::PlainText("Fresh headline body".into()))
    );
}

#[tokio::test]
async fn double_failure_reports_the_crawl_error() {
    let provider = ScriptedProvider::new().with_script(URL, {
        let mut s = Script::fail("scrape exploded");
        s.crawl = common::Outcome::Fail("crawl timed out".into());
        s
    });
    let provider = Arc::new(provider);
    let fetcher = Fetcher::new(provider.clone());

    let result = fetcher.crawl_site(URL, 5).await;
    assert!(!result.success);
    // The primary failure's message wins over the fallback's.
    assert_eq!(result.error.as_deref(), Some("crawl timed out"));
    // Exactly one fallback scrape was attempted.
    assert_eq!(provider.scrape_calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_content_is_success_not_failure() {
    let provider = ScriptedProvider::new().with_script(URL, Script::ok(""));
    let fetcher = Fetcher::new(Arc::new(provider));

    let result = fetcher.crawl_site(URL, 5).await;
    assert!(result.success);
    assert!(!result.has_content());
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn scrape_page_converts_provider_error_to_data() {
    let provider = ScriptedProvider::new().with_script(URL, Script::fail("HTTP 503"));
    let fetcher = Fetcher::new(Arc::new(provider));

    let result = fetcher.scrape_page(URL, None).await;
    assert!(!result.success);
    assert_eq!(result.url, URL);
    assert!(result.error.as_deref().unwrap().contains("HTTP 503"));
}

#[tokio::test]
async fn successful_crawl_never_touches_scrape() {
    let provider = Arc::new(ScriptedProvider::new().with_script(URL, Script::ok("Page body")));
    let fetcher = Fetcher::new(provider.clone());

    let result = fetcher.crawl_site(URL, 5).await;
    assert!(result.success);
    assert!(provider.scrape_calls.lock().unwrap().is_empty());
}
