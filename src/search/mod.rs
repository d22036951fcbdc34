// src/search/mod.rs
// =============================================================================
// This module asks external search engines whether disallowed paths got
// indexed despite the robots.txt exclusion.
//
// Submodules:
// - engine: the closed set of supported engines (Bing, Google, DuckDuckGo)
//   and their "site:" query URLs
// - extract: per-engine HTML extraction strategies that pull candidate
//   result URLs out of a search results page
// - adapter: the worker pool that runs the queries, throttled, and
//   status-checks every candidate that belongs to the target host
// =============================================================================

mod adapter;
mod engine;
mod extract;

pub use adapter::search_disallow_entries;
pub use engine::SearchEngine;
pub use extract::extract_candidates;
