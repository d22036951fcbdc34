// src/probe/engine.rs
// =============================================================================
// The bounded-concurrency fan-out/fan-in engine.
//
// Shape of the pipeline:
//
//   entries -> shared task queue -> N workers -> completion channel -> caller
//
// Each worker owns its own HTTP client and pops paths off the queue until it
// is empty; every popped path produces exactly one PathStatus on the
// completion channel, success or failure. A coordinator task joins all the
// workers and only then drops the last sender, so the receiving side sees a
// finite stream that ends exactly when all results are in — the channel can
// never close while a worker still holds work.
//
// One path failing never affects the rest of the batch. There is no global
// retry budget and no mid-batch cancellation; per-request timeouts bound how
// long a stuck task can hold a worker.
// =============================================================================

use crate::colors;
use crate::probe::status::{disallowed_url, fetch_status, probe_client, PathStatus};
use anyhow::Result;
use futures::future::join_all;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Resolves the worker count: a requested value of 0 means one worker per
/// available CPU core, and the result is always at least 1.
pub fn effective_concurrency(requested: usize) -> usize {
    if requested > 0 {
        requested
    } else {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Probes every disallow entry against `host` and returns one result per
/// entry, in completion order.
///
/// Results are printed as they arrive: 200s in green always, other statuses
/// in red unless `only200` was requested, transport errors recorded silently.
/// `quiet` suppresses all printing (JSON-to-stdout mode).
pub async fn probe_paths(
    host: &str,
    entries: &[String],
    concurrency: usize,
    only200: bool,
    quiet: bool,
) -> Result<Vec<PathStatus>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let concurrency = effective_concurrency(concurrency);
    let queue: Arc<Mutex<VecDeque<String>>> =
        Arc::new(Mutex::new(entries.iter().cloned().collect()));
    let (tx, mut rx) = mpsc::channel::<PathStatus>(entries.len());

    let mut workers = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let queue = Arc::clone(&queue);
        let tx = tx.clone();
        let host = host.to_string();
        let client = probe_client(concurrency)?;

        workers.push(tokio::spawn(async move {
            loop {
                // Hold the queue lock only for the pop, never across the
                // HTTP call.
                let path = queue.lock().await.pop_front();
                let Some(path) = path else { break };

                let url = disallowed_url(&host, &path);
                let result = fetch_status(&client, &url).await;
                if tx.send(result).await.is_err() {
                    // Receiver is gone; nothing left to report to.
                    break;
                }
            }
        }));
    }

    // Completion barrier: the channel closes only after every worker has
    // exited and this last sender is dropped.
    tokio::spawn(async move {
        join_all(workers).await;
        drop(tx);
    });

    let mut results = Vec::with_capacity(entries.len());
    while let Some(result) = rx.recv().await {
        display_result(&result, only200, quiet);
        results.push(result);
    }

    Ok(results)
}

/// Prints one probe result as it arrives.
fn display_result(result: &PathStatus, only200: bool, quiet: bool) {
    if quiet || result.is_error() {
        return;
    }

    if result.status_code == 200 {
        println!("{}{} {}{}", colors::GREEN, result.url, result.status, colors::RESET);
    } else if !only200 {
        println!("{}{} {}{}", colors::RED, result.url, result.status, colors::RESET);
    }
}
