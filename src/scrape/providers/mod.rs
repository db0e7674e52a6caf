pub mod firecrawl;
