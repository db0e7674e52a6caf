// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod digest;
pub mod fields;
pub mod filter;
pub mod present;
pub mod scrape;
pub mod sources;

// ---- Re-exports for stable public API ----
pub use crate::digest::{AggregationResult, Aggregator, DigestError, SourceOutcome};
pub use crate::fields::{FieldProfile, FieldTable};
pub use crate::present::{render, render_default, Renderable, DEFAULT_MAX_LEN};
pub use crate::scrape::providers::firecrawl::FirecrawlProvider;
pub use crate::scrape::types::{FetchResult, OutputFormat, Payload, ScrapeProvider, StructuredDoc};
pub use crate::scrape::Fetcher;
pub use crate::sources::{Source, SourceRegistry};
