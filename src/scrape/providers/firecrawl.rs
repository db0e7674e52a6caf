// src/scrape/providers/firecrawl.rs
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::scrape::types::{OutputFormat, Payload, ScrapeProvider, StructuredDoc};

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev/v1";

/// Firecrawl-backed scrape/crawl provider. The only network dependency of
/// the pipeline; everything behind it speaks `Payload`.
pub struct FirecrawlProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// `base_url` override is used by tests pointing at a local stub.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(anyhow!("firecrawl api key is required but not set"));
        }
        // Per-call timeout keeps a slow source from stalling its siblings.
        let http = reqwest::Client::builder()
            .user_agent("tech-news-digest/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .context("building reqwest client")?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.into(),
        })
    }
}

#[derive(Serialize)]
struct ScrapeReq<'a> {
    url: &'a str,
    formats: &'a [OutputFormat],
}

#[derive(Serialize)]
struct CrawlReq<'a> {
    url: &'a str,
    limit: u32,
    #[serde(rename = "scrapeOptions")]
    scrape_options: ScrapeOptions<'a>,
}

#[derive(Serialize)]
struct ScrapeOptions<'a> {
    formats: &'a [OutputFormat],
}

#[derive(Deserialize)]
struct ScrapeResp {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<StructuredDoc>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct CrawlResp {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Vec<StructuredDoc>,
    #[serde(default)]
    error: Option<String>,
}

/// Merge crawled pages into one structured payload so downstream code
/// treats scrape and crawl output uniformly.
fn merge_pages(pages: Vec<StructuredDoc>) -> StructuredDoc {
    let mut merged = StructuredDoc::default();
    let join = |acc: &mut Option<String>, part: Option<String>| {
        if let Some(p) = part.filter(|p| !p.trim().is_empty()) {
            match acc {
                Some(s) => {
                    s.push_str("\n\n");
                    s.push_str(&p);
                }
                None => *acc = Some(p),
            }
        }
    };
    for page in pages {
        join(&mut merged.markdown, page.markdown);
        join(&mut merged.text, page.text);
        join(&mut merged.html, page.html);
    }
    merged
}

#[async_trait]
impl ScrapeProvider for FirecrawlProvider {
    async fn scrape(&self, url: &str, formats: &[OutputFormat]) -> Result<Payload> {
        let resp = self
            .http
            .post(format!("{}/scrape", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&ScrapeReq { url, formats })
            .send()
            .await
            .with_context(|| format!("scrape request to {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("scrape of {url} returned HTTP {status}"));
        }

        let body: ScrapeResp = resp
            .json()
            .await
            .with_context(|| format!("decoding scrape response for {url}"))?;
        if !body.success {
            return Err(anyhow!(
                "provider rejected scrape of {url}: {}",
                body.error.unwrap_or_else(|| "unspecified error".into())
            ));
        }
        // Missing data on a successful response is empty content, not an error.
        Ok(Payload::Structured(body.data.unwrap_or_default()))
    }

    async fn crawl(&self, url: &str, page_limit: u32) -> Result<Payload> {
        let req = CrawlReq {
            url,
            limit: page_limit,
            scrape_options: ScrapeOptions {
                formats: crate::scrape::types::DEFAULT_FORMATS,
            },
        };
        let resp = self
            .http
            .post(format!("{}/crawl", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .with_context(|| format!("crawl request to {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("crawl of {url} returned HTTP {status}"));
        }

        let body: CrawlResp = resp
            .json()
            .await
            .with_context(|| format!("decoding crawl response for {url}"))?;
        if !body.success {
            return Err(anyhow!(
                "provider rejected crawl of {url}: {}",
                body.error.unwrap_or_else(|| "unspecified error".into())
            ));
        }
        Ok(Payload::Structured(merge_pages(body.data)))
    }

    fn name(&self) -> &'static str {
        "firecrawl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        assert!(FirecrawlProvider::new("").is_err());
    }

    #[test]
    fn merge_concatenates_present_fields_in_page_order() {
        let pages = vec![
            StructuredDoc {
                markdown: Some("one".into()),
                text: None,
                html: Some(" ".into()),
            },
            StructuredDoc {
                markdown: Some("two".into()),
                text: Some("t".into()),
                html: None,
            },
        ];
        let merged = merge_pages(pages);
        assert_eq!(merged.markdown.as_deref(), Some("one\n\ntwo"));
        assert_eq!(merged.text.as_deref(), Some("t"));
        assert!(merged.html.is_none());
    }

    #[test]
    fn format_serializes_lowercase() {
        let s = serde_json::to_string(&OutputFormat::Markdown).unwrap();
        assert_eq!(s, "\"markdown\"");
    }
}
