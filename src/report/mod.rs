// src/report/mod.rs
// =============================================================================
// This module turns a finished scan into a report:
// - aggregate: pure fold of the result list into a ScanReport with summary
//   counters (testable without any I/O)
// - export: JSON serialization to a string or a file
// =============================================================================

mod aggregate;
mod export;

pub use aggregate::{aggregate, ScanReport};
pub use export::{save_to_file, to_json};
