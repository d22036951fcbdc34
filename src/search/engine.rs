// src/search/engine.rs
// =============================================================================
// The supported search engines.
//
// A closed, small variant set: each engine knows how to turn a disallowed
// URL into a "site:" query URL, and (in extract.rs) how to read its own
// results page. Anything we don't recognize falls back to Bing, which is
// the least aggressive about blocking automated queries.
// =============================================================================

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Bing,
    Google,
    DuckDuckGo,
}

impl SearchEngine {
    /// Parses an engine name, case-insensitively. Unknown names resolve to
    /// Bing rather than failing — a typo should not kill a long scan.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "google" => SearchEngine::Google,
            "duckduckgo" | "duck" | "ddg" => SearchEngine::DuckDuckGo,
            _ => SearchEngine::Bing,
        }
    }

    /// Builds the query URL that asks this engine for pages indexed under
    /// the given disallowed URL.
    pub fn query_url(&self, disallowed_url: &str) -> String {
        match self {
            SearchEngine::Bing => {
                format!("http://www.bing.com/search?q=site:{}", disallowed_url)
            }
            SearchEngine::Google => {
                format!("https://www.google.com/search?q=site:{}", disallowed_url)
            }
            SearchEngine::DuckDuckGo => {
                // The html.duckduckgo.com frontend serves plain HTML without
                // JavaScript, which is the only kind we can parse.
                format!("https://html.duckduckgo.com/html/?q=site:{}", disallowed_url)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
            SearchEngine::Google => "google",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
