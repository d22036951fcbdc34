// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. Unlike tools with subcommands, the audit has
// a single flat flag surface: point it at a URL (or a file of hosts), pick
// options, run.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "robots-warden",
    version,
    about = "A robots.txt audit tool",
    long_about = "robots-warden reads a site's robots.txt, probes every Disallow path for its \
                  live HTTP status, and can ask Bing, Google or DuckDuckGo whether those \
                  supposedly hidden paths were indexed anyway."
)]
pub struct Cli {
    /// The URL which will be analyzed (e.g. www.example.com)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Scan a list of domains read from a file, one per line
    #[arg(short, long)]
    pub file: Option<String>,

    /// Show only the 'HTTP 200' status code results
    #[arg(short, long)]
    pub only200: bool,

    /// Search for the disallowed entries in a search engine
    #[arg(long, alias = "sb")]
    pub search_disallow: bool,

    /// Search engine to use: bing, google or duckduckgo (unknown values fall back to bing)
    #[arg(short, long, default_value = "bing")]
    pub engine: String,

    /// Number of concurrent workers (0 means one per available CPU core)
    #[arg(short, long, default_value_t = 0)]
    pub concurrency: usize,

    /// Export results to a JSON file
    #[arg(short, long)]
    pub json: Option<String>,

    /// Print JSON results to stdout instead of the normal output
    #[arg(long)]
    pub json_stdout: bool,
}

impl Cli {
    /// True when stdout must stay machine-readable, which silences the
    /// banner and all progress printing.
    pub fn quiet(&self) -> bool {
        self.json_stdout
    }
}
