// src/testutil.rs
// =============================================================================
// A tiny in-process HTTP fixture server for the worker-pool tests.
//
// It speaks just enough HTTP/1.1 for reqwest: read the request head, answer
// with a canned status + body, close the connection. Every request is logged
// as a (method, path) pair so tests can assert on what actually went over
// the wire (e.g. "HEAD happened exactly once, no GET retry").
//
// With `drop_head` set the server hangs up on HEAD requests without sending
// anything, which the client sees as a transport failure — that is how we
// exercise the HEAD -> GET fallback without a flaky external host.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct FixtureServer {
    /// Host:port the server listens on.
    pub host: String,
    hits: Arc<Mutex<Vec<(String, String)>>>,
}

impl FixtureServer {
    /// Starts a fixture server on an ephemeral port.
    ///
    /// `routes` maps a request path to (status code, GET body); unknown
    /// paths answer 404.
    pub async fn start(routes: Vec<(&'static str, u16, &'static str)>, drop_head: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture listener");
        let host = listener.local_addr().expect("fixture local addr").to_string();

        let routes: Arc<HashMap<&'static str, (u16, &'static str)>> = Arc::new(
            routes.into_iter().map(|(p, s, b)| (p, (s, b))).collect(),
        );
        let hits: Arc<Mutex<Vec<(String, String)>>> = Arc::default();

        let accept_hits = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&accept_hits);
                tokio::spawn(async move {
                    handle_connection(socket, routes, hits, drop_head).await;
                });
            }
        });

        FixtureServer { host, hits }
    }

    /// Every request seen so far, as (method, path) pairs in arrival order.
    pub fn hits(&self) -> Vec<(String, String)> {
        self.hits.lock().expect("fixture hits lock").clone()
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    routes: Arc<HashMap<&'static str, (u16, &'static str)>>,
    hits: Arc<Mutex<Vec<(String, String)>>>,
    drop_head: bool,
) {
    // Read until the end of the request head; fixture requests carry no body.
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 512];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let mut parts = request.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("/").to_string();
    hits.lock().expect("fixture hits lock").push((method.clone(), path.clone()));

    if drop_head && method == "HEAD" {
        // Hang up with no response: a transport-level failure for the client.
        return;
    }

    let (status, body) = routes.get(path.as_str()).copied().unwrap_or((404, ""));
    let reason = match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let payload = if method == "HEAD" { "" } else { body };
    let response = format!(
        "HTTP/1.1 {} {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        reason,
        payload.len(),
        payload
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
