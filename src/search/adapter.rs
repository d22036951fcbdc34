// src/search/adapter.rs
// =============================================================================
// The search-side worker pool.
//
// Mirrors the probe engine's fan-out/fan-in shape (shared task queue, N
// workers, completion channel closed behind a join barrier) with two
// deliberate differences:
//
// - Every query is preceded by a fixed 200 ms sleep, per worker. Search
//   providers block clients that hammer them; the throttle is part of the
//   contract, not an optimization target.
// - Queries go out with a full browser User-Agent, because several engines
//   serve bot-looking clients an empty or captcha page.
//
// One queried path can surface zero, one, or many indexed URLs, so unlike
// the probe engine there is no one-result-per-entry guarantee — only
// one result per discovered candidate that belongs to the audited host.
// =============================================================================

use crate::colors;
use crate::probe::{disallowed_url, fetch_status, probe_client, PathStatus};
use crate::search::engine::SearchEngine;
use crate::search::extract::extract_candidates;
use anyhow::Result;
use futures::future::join_all;
use reqwest::Client;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// Fixed pause before every search query. Lowering this gets scans
/// rate-limited or captcha-walled in short order.
const SEARCH_DELAY: Duration = Duration::from_millis(200);

/// Timeout for one search query; results pages are heavier than probes.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// What search queries identify themselves as.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Queries `engine` for every disallow entry and status-checks each
/// discovered URL that belongs to `host`.
///
/// Results print as they arrive (same 200/only200 rules as probing, with a
/// " - " prefix marking them as search finds). `quiet` suppresses printing.
pub async fn search_disallow_entries(
    host: &str,
    entries: &[String],
    concurrency: usize,
    engine: SearchEngine,
    only200: bool,
    quiet: bool,
) -> Result<Vec<PathStatus>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let concurrency = crate::probe::effective_concurrency(concurrency);
    let queue: Arc<Mutex<VecDeque<String>>> =
        Arc::new(Mutex::new(entries.iter().cloned().collect()));
    // Sized for several finds per entry; workers just wait if a page
    // surfaces more.
    let (tx, mut rx) = mpsc::channel::<PathStatus>(entries.len() * 5);

    let mut workers = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let queue = Arc::clone(&queue);
        let tx = tx.clone();
        let host = host.to_string();
        let query_client = search_client(concurrency)?;
        let check_client = probe_client(concurrency)?;

        workers.push(tokio::spawn(async move {
            loop {
                let path = queue.lock().await.pop_front();
                let Some(path) = path else { break };

                run_search_task(
                    &query_client,
                    &check_client,
                    engine,
                    &host,
                    &path,
                    quiet,
                    &tx,
                )
                .await;
            }
        }));
    }

    // Same closing discipline as the probe engine: join every worker, then
    // drop the last sender.
    tokio::spawn(async move {
        join_all(workers).await;
        drop(tx);
    });

    let mut results = Vec::new();
    while let Some(result) = rx.recv().await {
        display_result(&result, only200, quiet);
        results.push(result);
    }

    Ok(results)
}

/// One search task: throttle, query, extract, check matching candidates.
///
/// Every failure mode here is contained: a failed query or unreadable page
/// skips this entry and the worker moves on.
async fn run_search_task(
    query_client: &Client,
    check_client: &Client,
    engine: SearchEngine,
    host: &str,
    path: &str,
    quiet: bool,
    tx: &mpsc::Sender<PathStatus>,
) {
    tokio::time::sleep(SEARCH_DELAY).await;

    let disurl = disallowed_url(host, path);
    let query_url = engine.query_url(&disurl);

    let response = match query_client.get(&query_url).send().await {
        Ok(response) => response,
        Err(_) => return,
    };
    let html = match response.text().await {
        Ok(html) => html,
        Err(_) => return,
    };

    let candidates = extract_candidates(engine, &html, &query_url);
    if candidates.is_empty() {
        if !quiet {
            eprintln!(
                "{}No search results extracted for {}{}",
                colors::YELLOW,
                disurl,
                colors::RESET
            );
        }
        return;
    }

    for candidate in filter_candidates(candidates, host) {
        let result = fetch_status(check_client, &candidate).await;
        if tx.send(result).await.is_err() {
            return;
        }
    }
}

/// Keeps only the candidates that mention the audited host. Search pages are
/// full of the engine's own navigation links; those never match.
fn filter_candidates(candidates: Vec<String>, host: &str) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.contains(host))
        .collect()
}

fn search_client(concurrency: usize) -> Result<Client> {
    let client = Client::builder()
        .timeout(SEARCH_TIMEOUT)
        .pool_max_idle_per_host(concurrency)
        .user_agent(BROWSER_USER_AGENT)
        .build()?;
    Ok(client)
}

fn display_result(result: &PathStatus, only200: bool, quiet: bool) {
    if quiet || result.is_error() {
        return;
    }

    if result.status_code == 200 {
        println!(
            "{} - {} {}{}",
            colors::GREEN,
            result.url,
            result.status,
            colors::RESET
        );
    } else if !only200 {
        println!(
            "{} - {} {}{}",
            colors::RED,
            result.url,
            result.status,
            colors::RESET
        );
    }
}
