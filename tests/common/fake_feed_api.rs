//! Fake earthquake feed server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /feed.geojson` — the configured body with the configured status,
//!   optionally after a delay
//!
//! Every request is counted so harnesses can assert how many times the
//! loader actually went to the network.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeFeedApi::start().await.unwrap();
//! api.respond(StatusCode::OK, feed_mixed_body());
//! let config = api.feed_config();
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use seismo_core::config::FeedConfig;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// State shared between the router and test code.
struct ApiState {
    status: Mutex<StatusCode>,
    body: Mutex<String>,
    delay: Mutex<Duration>,
    hits: AtomicUsize,
}

/// Handle to the running fake feed server.
pub struct FakeFeedApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl FakeFeedApi {
    /// Start the server on a random port, answering 200 with an empty
    /// collection until told otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ApiState {
            status: Mutex::new(StatusCode::OK),
            body: Mutex::new(super::fixtures::feed_empty_body()),
            delay: Mutex::new(Duration::ZERO),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/feed.geojson", get(serve_feed))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the feed endpoint.
    pub fn feed_url(&self) -> String {
        format!("http://{}/feed.geojson", self.addr)
    }

    /// Feed config pointing at this server with the production TTL and a
    /// short timeout.
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            url: self.feed_url(),
            timeout_secs: 2,
            cache_ttl_secs: 300,
        }
    }

    pub fn respond(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.status.lock().unwrap() = status;
        *self.state.body.lock().unwrap() = body.into();
    }

    /// Delay every response by `delay`.
    pub fn delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = delay;
    }

    /// Requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn serve_feed(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let delay = *state.delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let status = *state.status.lock().unwrap();
    let body = state.body.lock().unwrap().clone();
    (status, [("content-type", "application/geo+json")], body)
}
