// Shared test double for the scrape provider: per-URL scripted outcomes
// with optional artificial latency, plus call recording.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tech_news_digest::{OutputFormat, Payload, ScrapeProvider};

#[derive(Clone, Debug)]
pub enum Outcome {
    Content(String),
    Fail(String),
}

#[derive(Clone, Debug)]
pub struct Script {
    pub crawl: Outcome,
    pub scrape: Outcome,
    /// Artificial latency applied to crawl calls, to shuffle completion order.
    pub delay_ms: u64,
}

impl Script {
    pub fn ok(content: &str) -> Self {
        Self {
            crawl: Outcome::Content(content.to_string()),
            scrape: Outcome::Content(content.to_string()),
            delay_ms: 0,
        }
    }

    pub fn fail(error: &str) -> Self {
        Self {
            crawl: Outcome::Fail(error.to_string()),
            scrape: Outcome::Fail(error.to_string()),
            delay_ms: 0,
        }
    }

    pub fn crawl_fails_scrape_ok(error: &str, content: &str) -> Self {
        Self {
            crawl: Outcome::Fail(error.to_string()),
            scrape: Outcome::Content(content.to_string()),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

pub struct ScriptedProvider {
    scripts: HashMap<String, Script>,
    pub crawl_calls: Mutex<Vec<String>>,
    pub scrape_calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            crawl_calls: Mutex::new(Vec::new()),
            scrape_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_script(mut self, url: &str, script: Script) -> Self {
        self.scripts.insert(url.to_string(), script);
        self
    }

    fn script_for(&self, url: &str) -> Script {
        self.scripts
            .get(url)
            .cloned()
            .unwrap_or_else(|| Script::fail(&format!("no script for {url}")))
    }
}

fn resolve(outcome: &Outcome) -> Result<Payload> {
    match outcome {
        Outcome::Content(s) => Ok(Payload::PlainText(s.clone())),
        Outcome::Fail(e) => Err(anyhow!("{e}")),
    }
}

#[async_trait]
impl ScrapeProvider for ScriptedProvider {
    async fn scrape(&self, url: &str, _formats: &[OutputFormat]) -> Result<Payload> {
        self.scrape_calls.lock().unwrap().push(url.to_string());
        resolve(&self.script_for(url).scrape)
    }

    async fn crawl(&self, url: &str, _page_limit: u32) -> Result<Payload> {
        self.crawl_calls.lock().unwrap().push(url.to_string());
        let script = self.script_for(url);
        if script.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(script.delay_ms)).await;
        }
        resolve(&script.crawl)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
