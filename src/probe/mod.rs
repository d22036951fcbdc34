// src/probe/mod.rs
// =============================================================================
// This module probes disallowed paths for their live HTTP status.
//
// Submodules:
// - status: the PathStatus result type and the single-URL check routine
//   (HEAD first, GET retry on transport failure)
// - engine: the bounded worker pool that fans a path list out across
//   concurrent checks and fans the results back in
//
// The same status-check routine is reused by the search adapter for the
// URLs it discovers, so "what does a check mean" lives in one place.
// =============================================================================

mod engine;
mod status;

pub use engine::{effective_concurrency, probe_paths};
pub use status::{disallowed_url, fetch_status, probe_client, PathStatus};
