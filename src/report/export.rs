// src/report/export.rs
// =============================================================================
// JSON export of a ScanReport, either as a string (for --json-stdout) or
// written to a file (for --json <FILE>).
// =============================================================================

use crate::report::aggregate::ScanReport;
use anyhow::{Context, Result};
use std::fs;

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &ScanReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report).context("serializing scan report")?;
    Ok(json)
}

/// Writes a report to `path` as pretty-printed JSON.
pub fn save_to_file(report: &ScanReport, path: &str) -> Result<()> {
    let json = to_json(report)?;
    fs::write(path, json).with_context(|| format!("writing report to '{}'", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::PathStatus;
    use crate::report::aggregate::aggregate;
    use std::time::Duration;

    #[test]
    fn test_report_json_schema_field_names() {
        let results = vec![PathStatus {
            url: "http://h/a".to_string(),
            status_code: 200,
            status: "200 OK".to_string(),
            error: None,
        }];
        let report = aggregate("h", Duration::from_secs(2), results, false);
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert!(json["timestamp"].is_string());
        assert_eq!(json["url"], "h");
        assert_eq!(json["duration_seconds"], 2.0);
        assert_eq!(json["total_paths"], 1);
        assert_eq!(json["status_200"], 1);
        assert_eq!(json["other_status"], 0);
        assert_eq!(json["errors"], 0);
        assert_eq!(json["results"][0]["URL"], "http://h/a");
        assert_eq!(json["results"][0]["StatusCode"], 200);
        assert_eq!(json["results"][0]["Status"], "200 OK");
        assert!(json["results"][0]["Error"].is_null());
    }

    #[test]
    fn test_save_to_file_round_trips() {
        let report = aggregate("h", Duration::from_secs(1), Vec::new(), false);
        let path = std::env::temp_dir().join("robots-warden-export-test.json");
        let path = path.to_str().unwrap();

        save_to_file(&report, path).unwrap();
        let loaded: ScanReport =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(loaded, report);

        let _ = std::fs::remove_file(path);
    }
}
