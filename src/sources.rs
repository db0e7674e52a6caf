//! # Source Registry
//!
//! Ordered, read-only catalog of remote news sources the aggregator can
//! fetch from. Loaded once at startup from JSON config, falling back to a
//! built-in seed. Registry iteration order is the canonical order in which
//! digests are assembled, so it must stay stable across runs.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const ENV_SOURCES_PATH: &str = "NEWS_SOURCES_PATH";
pub const DEFAULT_SOURCES_PATH: &str = "config/news_sources.json";

/// One configured remote content origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Unique string key, e.g. "hacker_news".
    pub id: String,
    /// Fetch URL handed to the scrape provider.
    pub url: String,
    /// Human-readable display name used in digest labels.
    pub name: String,
    pub description: String,
    /// Applicable-fields tag; currently always `["all"]`.
    #[serde(default = "all_fields")]
    pub fields: Vec<String>,
}

fn all_fields() -> Vec<String> {
    vec!["all".to_string()]
}

/// Immutable source catalog. Iteration order == configuration order.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// Load from a JSON file (an array of sources).
    /// Falls back to `default_seed()` on any read/parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<Vec<Source>>(&s)
                .map(|sources| Self { sources })
                .unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load using `$NEWS_SOURCES_PATH` if set, else the default path.
    pub fn load_default() -> Self {
        let path = std::env::var(ENV_SOURCES_PATH)
            .unwrap_or_else(|_| DEFAULT_SOURCES_PATH.to_string());
        Self::load_from_file(path)
    }

    pub fn from_sources(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    pub fn get(&self, id: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// First registry entry; used for the generic front-page fetch path.
    pub fn default_source(&self) -> Option<&Source> {
        self.sources.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Built-in seed with the stock tech sources. Used when no config exists.
    pub fn default_seed() -> Self {
        let mk = |id: &str, url: &str, name: &str, description: &str| Source {
            id: id.to_string(),
            url: url.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            fields: all_fields(),
        };
        Self {
            sources: vec![
                mk(
                    "hacker_news",
                    "https://news.ycombinator.com/",
                    "Hacker News",
                    "Latest tech news and discussions",
                ),
                mk(
                    "techcrunch",
                    "https://techcrunch.com/",
                    "TechCrunch",
                    "Technology news and startup coverage",
                ),
                mk(
                    "arstechnica",
                    "https://arstechnica.com/",
                    "Ars Technica",
                    "Technology news and analysis",
                ),
                mk(
                    "the_verge",
                    "https://www.theverge.com/",
                    "The Verge",
                    "Technology, science, art, and culture",
                ),
            ],
        }
    }
}
