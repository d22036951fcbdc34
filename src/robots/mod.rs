// src/robots/mod.rs
// =============================================================================
// This module handles the robots.txt side of the audit:
// - fetch: downloads http://<host>/robots.txt
// - parse: scans it line by line for Disallow entries
//
// The entry list it produces is the input for both the probe engine and the
// search adapter. It is returned by value and owned by the caller — nothing
// here is cached or shared between scans, so scanning several hosts in one
// run can never leak paths from one host into another.
// =============================================================================

mod fetch;

pub use fetch::{fetch_disallow_entries, parse_disallow_entries, robots_client};
