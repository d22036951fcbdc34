// src/probe/status.rs
// =============================================================================
// The result of checking one URL, and the check itself.
//
// Every attempted request produces exactly one PathStatus. Either the request
// got an HTTP response (status_code/status are set) or it failed at the
// transport level (error is set) — never both, never neither.
//
// The JSON field names (URL, StatusCode, Status, Error) are a data contract
// with existing report consumers, so they stay capitalized even though that
// is unusual for Rust-produced JSON.
// =============================================================================

use anyhow::Result;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User agent sent on every probe request.
pub const PROBE_USER_AGENT: &str = "Mozilla/5.0 Parsero/1.0";

/// Timeout for each individual probe request.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of one HTTP status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStatus {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl PathStatus {
    /// Builds a result from a received HTTP response.
    pub fn from_response(url: &str, response: &Response) -> Self {
        let code = response.status();
        let status = match code.canonical_reason() {
            Some(reason) => format!("{} {}", code.as_u16(), reason),
            None => code.as_u16().to_string(),
        };
        PathStatus {
            url: url.to_string(),
            status_code: code.as_u16(),
            status,
            error: None,
        }
    }

    /// Builds a result for a request that never produced a response.
    pub fn transport_error(url: &str, error: &reqwest::Error) -> Self {
        PathStatus {
            url: url.to_string(),
            status_code: 0,
            status: String::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Builds the HTTP client a single worker owns.
///
/// The connection pool is sized to the worker count so a busy pool reuses
/// connections instead of opening one per request.
pub fn probe_client(concurrency: usize) -> Result<Client> {
    let client = Client::builder()
        .timeout(PROBE_TIMEOUT)
        .pool_max_idle_per_host(concurrency)
        .user_agent(PROBE_USER_AGENT)
        .build()?;
    Ok(client)
}

/// Builds the probe URL for one disallow entry.
///
/// Entries carry no leading slash, so this is plain concatenation; no path
/// normalization happens here on purpose — we probe exactly what the
/// robots.txt declared.
pub fn disallowed_url(host: &str, path: &str) -> String {
    format!("http://{}/{}", host, path)
}

/// Checks one URL and returns its status.
///
/// A HEAD request goes out first since we only care about the status line.
/// If HEAD fails at the transport level (connection refused, timeout, reset)
/// we retry once with a full GET — some servers mishandle HEAD. An HTTP-level
/// error status (403, 404, ...) is a real answer and is never retried.
pub async fn fetch_status(client: &Client, url: &str) -> PathStatus {
    match client.head(url).send().await {
        Ok(response) => PathStatus::from_response(url, &response),
        Err(_) => match client.get(url).send().await {
            Ok(response) => PathStatus::from_response(url, &response),
            Err(e) => PathStatus::transport_error(url, &e),
        },
    }
}
