// src/robots/fetch.rs
// =============================================================================
// Fetches and parses one robots.txt document.
//
// The contract is deliberately forgiving: a missing or unreachable robots.txt
// is not an error that stops the program — it just means there is nothing to
// audit for this host. The caller gets an Err, prints a notice, and moves on
// with an empty entry list.
//
// Parsing keeps the quirks of the robots.txt files found in the wild intact:
// - duplicates are kept (the site author wrote them twice, we report twice)
// - no case folding, no trailing-slash normalization
// - only lines starting with exactly "Disallow: /" count; a bare "Disallow:"
//   (allow-everything) and "Allow:" lines are skipped
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

/// Prefix that marks a line as a disallow rule with a concrete path.
const DISALLOW_PREFIX: &str = "Disallow: /";

/// Timeout for the single robots.txt request.
const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the client used for the robots.txt fetch.
pub fn robots_client() -> Result<Client> {
    let client = Client::builder().timeout(ROBOTS_TIMEOUT).build()?;
    Ok(client)
}

/// Downloads `http://<host>/robots.txt` and returns its Disallow entries in
/// document order.
///
/// `host` is a bare hostname, no scheme. Any transport failure or non-success
/// status is reported as an error so the caller can print the "no robots.txt"
/// notice; the scan itself continues with zero entries.
pub async fn fetch_disallow_entries(client: &Client, host: &str) -> Result<Vec<String>> {
    let robots_url = format!("http://{}/robots.txt", host);

    let response = client
        .get(&robots_url)
        .send()
        .await
        .map_err(|e| anyhow!("failed to fetch {}: {}", robots_url, e))?;

    if !response.status().is_success() {
        return Err(anyhow!("{} returned HTTP {}", robots_url, response.status()));
    }

    let body = response.text().await?;
    Ok(parse_disallow_entries(&body))
}

/// Extracts every Disallow path fragment from a robots.txt body.
///
/// One linear pass over the lines. Each line starting with "Disallow: /"
/// yields the trimmed remainder after that prefix (which may be empty, for a
/// site that disallows its root with "Disallow: /").
pub fn parse_disallow_entries(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            line.strip_prefix(DISALLOW_PREFIX)
                .map(|path| path.trim().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_entries() {
        let body = "User-agent: *\nDisallow: /admin/\nDisallow: /private/\nDisallow: /secret.html\nAllow: /public/\n";
        let entries = parse_disallow_entries(body);
        assert_eq!(entries, vec!["admin/", "private/", "secret.html"]);
    }

    #[test]
    fn test_parse_keeps_document_order_and_duplicates() {
        let body = "Disallow: /b\nDisallow: /a\nDisallow: /b\n";
        let entries = parse_disallow_entries(body);
        assert_eq!(entries, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let body = "Disallow: /cgi-bin/ \r\nDisallow: /tmp/\t\n";
        let entries = parse_disallow_entries(body);
        assert_eq!(entries, vec!["cgi-bin/", "tmp/"]);
    }

    #[test]
    fn test_parse_ignores_bare_disallow_and_allow_lines() {
        // "Disallow:" with no path means "allow everything" — not an entry.
        let body = "Disallow:\nDisallow: \nAllow: /ok/\nSitemap: http://x/sitemap.xml\n";
        let entries = parse_disallow_entries(body);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_root_disallow_yields_empty_fragment() {
        let body = "Disallow: /\n";
        let entries = parse_disallow_entries(body);
        assert_eq!(entries, vec![""]);
    }

    #[test]
    fn test_parse_is_case_and_slash_sensitive() {
        // No normalization: "disallow:" (lowercase) does not match the prefix.
        let body = "disallow: /lower\nDisallow: /Upper/\n";
        let entries = parse_disallow_entries(body);
        assert_eq!(entries, vec!["Upper/"]);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_disallow_entries("").is_empty());
    }
}
