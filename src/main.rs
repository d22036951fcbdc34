// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Resolve the target host list (--url and/or --file)
// 3. For each host: fetch robots.txt, probe the disallowed paths, optionally
//    search for them in a search engine, aggregate a report
// 4. Print the report and/or export it as JSON
//
// Almost every error along the way is contained: an unreachable host, a
// missing robots.txt or a blocked search query all show up as data (a notice
// or a result record), never as a crash. The only fatal conditions are bad
// CLI arguments and a --file that cannot be read.
// =============================================================================

mod banner;
mod cli;
mod colors;
mod probe;
mod report;
mod robots;
mod search;
#[cfg(test)]
mod testutil;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;
use search::SearchEngine;
use std::fs;
use std::time::Instant;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}Error: {}{}", colors::RED, e, colors::RESET);
        std::process::exit(2);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet();

    let targets = resolve_targets(&cli)?;
    if targets.is_empty() {
        // Nothing to scan: show the banner and the usage text.
        banner::print_logo();
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    if !quiet {
        banner::print_logo();
    }

    let engine = SearchEngine::parse(&cli.engine);
    let robots_client = robots::robots_client()?;

    for host in &targets {
        scan_host(&cli, engine, &robots_client, host).await?;
    }

    Ok(())
}

/// Audits one host end to end.
async fn scan_host(
    cli: &Cli,
    engine: SearchEngine,
    robots_client: &reqwest::Client,
    host: &str,
) -> Result<()> {
    let quiet = cli.quiet();
    let start = Instant::now();

    if !quiet {
        banner::print_scan_header(host);
    }

    // A missing robots.txt is a notice, not a failure: the scan continues
    // with zero entries and produces an empty report.
    let entries = match robots::fetch_disallow_entries(robots_client, host).await {
        Ok(entries) => {
            if entries.is_empty() && !quiet {
                println!(
                    "{}No Disallow entries found in robots.txt.{}",
                    colors::YELLOW,
                    colors::RESET
                );
            }
            entries
        }
        Err(_) => {
            if !quiet {
                println!(
                    "{}No robots.txt file has been found.{}",
                    colors::RED,
                    colors::RESET
                );
            }
            Vec::new()
        }
    };

    let mut results = Vec::new();
    if !entries.is_empty() {
        if !quiet {
            println!(
                "Found {} Disallow entries. Processing with {} workers...",
                entries.len(),
                probe::effective_concurrency(cli.concurrency)
            );
        }

        results = probe::probe_paths(host, &entries, cli.concurrency, cli.only200, quiet).await?;

        if cli.search_disallow {
            if !quiet {
                println!("\nSearching the Disallow entries using {}...\n", engine);
            }
            let found = search::search_disallow_entries(
                host,
                &entries,
                cli.concurrency,
                engine,
                cli.only200,
                quiet,
            )
            .await?;
            results.extend(found);
        }
    }

    let duration = start.elapsed();
    let scan_report = report::aggregate(host, duration, results, cli.only200);

    if cli.json_stdout {
        println!("{}", report::to_json(&scan_report)?);
    }

    if let Some(path) = &cli.json {
        // Export failures should not abort the remaining hosts.
        match report::save_to_file(&scan_report, path) {
            Ok(()) => {
                if !quiet {
                    println!(
                        "{}Results exported to {}{}",
                        colors::GREEN,
                        path,
                        colors::RESET
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "{}Error saving JSON to file: {}{}",
                    colors::RED,
                    e,
                    colors::RESET
                );
            }
        }
    }

    if !quiet {
        println!("\nFinished in {:.2} seconds.", duration.as_secs_f64());
    }

    Ok(())
}

/// Collects the hosts to scan: lines of --file first, then --url.
///
/// An unreadable --file is the one input error we treat as fatal — the user
/// named it explicitly, so silently scanning nothing would be worse.
fn resolve_targets(cli: &Cli) -> Result<Vec<String>> {
    let mut targets = Vec::new();

    if let Some(file) = &cli.file {
        let content =
            fs::read_to_string(file).with_context(|| format!("the file '{}' doesn't exist", file))?;
        targets.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(strip_scheme),
        );
    }

    if let Some(url) = &cli.url {
        targets.push(strip_scheme(url));
    }

    Ok(targets)
}

/// Reduces a target to a bare host: scheme stripped, everything else (port,
/// path) left untouched.
fn strip_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("http://").unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix("https://").unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme_removes_http_and_https() {
        assert_eq!(strip_scheme("http://www.example.com"), "www.example.com");
        assert_eq!(strip_scheme("https://example.com"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }

    #[test]
    fn test_strip_scheme_keeps_port_and_whitespace_trimmed() {
        assert_eq!(strip_scheme(" http://localhost:8080 "), "localhost:8080");
    }

    #[test]
    fn test_resolve_targets_combines_file_and_url() {
        let list = std::env::temp_dir().join("robots-warden-targets-test.txt");
        fs::write(&list, "example.com\n\n  https://other.org  \n").unwrap();

        let cli = Cli::parse_from([
            "robots-warden",
            "--file",
            list.to_str().unwrap(),
            "--url",
            "http://third.net",
        ]);
        let targets = resolve_targets(&cli).unwrap();
        assert_eq!(targets, vec!["example.com", "other.org", "third.net"]);

        let _ = fs::remove_file(&list);
    }

    #[test]
    fn test_resolve_targets_missing_file_is_fatal() {
        let cli = Cli::parse_from(["robots-warden", "--file", "/nonexistent/hosts.txt"]);
        assert!(resolve_targets(&cli).is_err());
    }

    #[test]
    fn test_resolve_targets_empty_cli_yields_no_targets() {
        let cli = Cli::parse_from(["robots-warden"]);
        assert!(resolve_targets(&cli).unwrap().is_empty());
    }
}
