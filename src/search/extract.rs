// src/search/extract.rs
// =============================================================================
// Pulls candidate result URLs out of a search engine's HTML.
//
// Each engine formats its results page differently, so extraction is a
// per-engine strategy over the same parsed document:
//
// - Bing wraps the displayed URL of every hit in a <cite> element; the cite
//   text is the candidate.
// - Google links results through a /url?q=<target>&... redirect; the real
//   target sits between the marker and the next '&'.
// - DuckDuckGo's HTML frontend has changed shape several times, so we run
//   four independent passes and let each contribute what it can.
//
// Extraction never fails: malformed HTML just yields fewer (or zero)
// candidates. Deciding which candidates belong to the audited host happens
// in the adapter, not here.
// =============================================================================

use crate::search::engine::SearchEngine;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Marker Google puts in front of the real target in its redirect links.
const GOOGLE_REDIRECT_MARKER: &str = "/url?q=";

/// Extracts candidate result URLs from one search results page.
///
/// `query_url` is the URL the page was fetched from; relative and
/// protocol-relative links are resolved against it.
pub fn extract_candidates(engine: SearchEngine, html: &str, query_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    match engine {
        SearchEngine::Bing => extract_bing(&document),
        SearchEngine::Google => extract_google(&document),
        SearchEngine::DuckDuckGo => extract_duckduckgo(&document, query_url),
    }
}

/// Bing: the text of every citation element is a displayed result URL.
fn extract_bing(document: &Html) -> Vec<String> {
    let cite = Selector::parse("cite").unwrap();
    document
        .select(&cite)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Google: anchors whose href routes through the /url?q= redirect; the real
/// target is the substring before the next '&'.
fn extract_google(document: &Html) -> Vec<String> {
    let anchors = Selector::parse("a[href]").unwrap();
    let mut candidates = Vec::new();

    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some((_, after)) = href.split_once(GOOGLE_REDIRECT_MARKER) else {
            continue;
        };
        let target = match after.find('&') {
            Some(idx) => &after[..idx],
            None => after,
        };
        if !target.is_empty() {
            candidates.push(target.to_string());
        }
    }

    candidates
}

/// DuckDuckGo: four independent passes, each of which may contribute zero or
/// more candidates. Duplicates across passes are reported once.
fn extract_duckduckgo(document: &Html, query_url: &str) -> Vec<String> {
    let base = Url::parse(query_url).ok();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut push = |url: String| {
        if seen.insert(url.clone()) {
            candidates.push(url);
        }
    };

    // Pass 1: result-link anchors from the HTML frontend.
    let result_links = Selector::parse("a.result__a").unwrap();
    for element in document.select(&result_links) {
        if let Some(href) = element.value().attr("href") {
            if let Some(url) = absolutize(base.as_ref(), href) {
                push(url);
            }
        }
    }

    // Pass 2: redirect-style anchors carrying the percent-encoded target in
    // their uddg query parameter.
    let anchors = Selector::parse("a[href]").unwrap();
    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.contains("uddg=") {
            continue;
        }
        if let Some(target) = decode_uddg(base.as_ref(), href) {
            push(target);
        }
    }

    // Pass 3: free-text URLs inside result snippets.
    let snippets = Selector::parse(".result__snippet").unwrap();
    for element in document.select(&snippets) {
        let text = element.text().collect::<String>();
        for url in urls_in_text(&text) {
            push(url);
        }
    }

    // Pass 4: catch-all scan over every absolute anchor on the page.
    for element in document.select(&anchors) {
        if let Some(href) = element.value().attr("href") {
            if href.starts_with("http://") || href.starts_with("https://") {
                push(href.to_string());
            }
        }
    }

    candidates
}

/// Resolves an href that may be relative or protocol-relative.
fn absolutize(base: Option<&Url>, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base?.join(href).ok().map(|url| url.to_string()),
    }
}

/// Pulls the percent-decoded target out of a DuckDuckGo redirect link like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fadmin%2F&rut=...`.
fn decode_uddg(base: Option<&Url>, href: &str) -> Option<String> {
    let absolute = absolutize(base, href)?;
    let parsed = Url::parse(&absolute).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
}

/// Scans free text for http(s) URLs. A URL runs until whitespace or a
/// character that cannot belong to it in prose; trailing sentence
/// punctuation is stripped.
fn urls_in_text(text: &str) -> Vec<String> {
    let mut urls = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("http") {
        let tail = &rest[start..];
        if !(tail.starts_with("http://") || tail.starts_with("https://")) {
            rest = &rest[start + 4..];
            continue;
        }

        let end = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | ')'))
            .unwrap_or(tail.len());
        let url = tail[..end].trim_end_matches(['.', ',', ';']);
        if url.len() > "https://".len() {
            urls.push(url.to_string());
        }
        rest = &tail[end..];
    }

    urls
}
