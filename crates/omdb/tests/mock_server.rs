use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use anyhow::{Context, Result, anyhow};
use serde_json::{Value, json};
use tokio::sync::oneshot;
use warp::Filter;
use warp::Reply;
use warp::http::StatusCode;

pub const API_KEY: &str = "mock_api_key";

/// Mock OMDb server for testing the blocking client.
///
/// warp needs a tokio runtime, the client must not run inside one, so the
/// server lives on its own thread.
pub struct MockOmdbServer {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
    server_thread: Option<JoinHandle<()>>,
}

/// Title responses loaded from tests/test_data/ratings.json
fn load_titles() -> Result<HashMap<String, Value>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/test_data/ratings.json");
    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path:?}"))?;
    serde_json::from_str(&text).with_context(|| "Failed to parse ratings.json")
}

fn respond(titles: &HashMap<String, Value>, query: &HashMap<String, String>) -> warp::reply::Response {
    if query.get("apiKey").map(String::as_str) != Some(API_KEY) {
        return warp::reply::with_status(
            warp::reply::json(&json!({"Response": "False", "Error": "Invalid API key!"})),
            StatusCode::UNAUTHORIZED,
        )
        .into_response();
    }

    let title = query.get("t").cloned().unwrap_or_default();
    match title.as_str() {
        "Teapot" => warp::reply::with_status("upstream exploded", StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        "Garbled" => warp::reply::with_status("{\"Ratings\": [", StatusCode::OK).into_response(),
        _ => match titles.get(&title) {
            Some(body) => warp::reply::json(body).into_response(),
            None => warp::reply::json(&json!({"Response": "False", "Error": "Movie not found!"}))
                .into_response(),
        },
    }
}

impl MockOmdbServer {
    /// Start the mock server on an ephemeral port
    pub fn start() -> Result<Self> {
        let titles = Arc::new(load_titles()?);
        let requests = Arc::new(AtomicUsize::new(0));
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let counter = requests.clone();
        let server_thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock server runtime");

            runtime.block_on(async move {
                let route = warp::get()
                    .and(warp::path::end())
                    .and(warp::query::<HashMap<String, String>>())
                    .map(move |query: HashMap<String, String>| {
                        counter.fetch_add(1, Ordering::SeqCst);
                        respond(&titles, &query)
                    });

                let (addr, server) = warp::serve(route)
                    .bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                        let _ = shutdown_rx.await;
                    });
                addr_tx.send(addr).expect("report mock server address");
                server.await;
            });
        });

        let addr = addr_rx
            .recv()
            .map_err(|_| anyhow!("mock server failed to start"))?;

        Ok(MockOmdbServer {
            addr,
            requests,
            shutdown: Some(shutdown_tx),
            server_thread: Some(server_thread),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for MockOmdbServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }
}
