// src/report/aggregate.rs
// =============================================================================
// Builds the final ScanReport from a finished scan.
//
// aggregate() is a pure function of its inputs apart from the timestamp:
// same host, duration and results always produce the same counters and the
// same (ordered) result list. That keeps the summary logic deterministic
// under test, which matters because the results arrive in nondeterministic
// completion order from the worker pools.
//
// Counter invariants, held by construction:
//   total_paths == results.len()
//   status_200 + other_status + errors == total_paths
// =============================================================================

use crate::probe::PathStatus;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The complete result of auditing one host.
///
/// Field names in JSON follow the established report schema
/// (timestamp, url, duration_seconds, results, total_paths, status_200,
/// other_status, errors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub timestamp: String,
    pub url: String,
    #[serde(rename = "duration_seconds")]
    pub duration: f64,
    pub results: Vec<PathStatus>,
    pub total_paths: usize,
    pub status_200: usize,
    pub other_status: usize,
    pub errors: usize,
}

/// Folds the scan results for one host into a report.
///
/// With `only200` set, the result list is first filtered down to entries
/// that answered 200 — which forces other_status and errors to zero, since
/// nothing else survives the filter.
pub fn aggregate(host: &str, duration: Duration, results: Vec<PathStatus>, only200: bool) -> ScanReport {
    let results: Vec<PathStatus> = if only200 {
        results
            .into_iter()
            .filter(|r| !r.is_error() && r.status_code == 200)
            .collect()
    } else {
        results
    };

    let mut report = ScanReport {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        url: host.to_string(),
        duration: duration.as_secs_f64(),
        total_paths: results.len(),
        status_200: 0,
        other_status: 0,
        errors: 0,
        results,
    };

    for result in &report.results {
        if result.is_error() {
            report.errors += 1;
        } else if result.status_code == 200 {
            report.status_200 += 1;
        } else {
            report.other_status += 1;
        }
    }

    report
}
