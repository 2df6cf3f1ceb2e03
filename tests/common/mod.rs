#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

pub const REDDIT_OK: &str = "https://www.reddit.com/r/rust/comments/1";
pub const HN_OK: &str = "https://news.ycombinator.com/item?id=1";
pub const UPSTREAM_FAIL: &str = "https://www.reddit.com/r/rust/comments/upstream-fail";
pub const OPAQUE_FAIL: &str = "https://www.reddit.com/r/rust/comments/opaque-fail";
pub const MALFORMED: &str = "https://www.reddit.com/r/rust/comments/malformed";
pub const SLOW: &str = "https://news.ycombinator.com/item?id=slow";

/// Stand-in for the remote summarization API, listening on a random port.
pub struct MockSummarizer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockSummarizer {
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/summarize", post(summarize))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock summarizer");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn fixture() -> Value {
    json!({
        "summary": "The thread debates whether async Rust is worth the complexity.",
        "top_insights": [
            "Most pain comes from pinning",
            "Tokio is the de facto runtime",
            "Blocking calls in async code are a common bug"
        ],
        "consensus": "Async is worth it for network services.",
        "controversial": "Whether colored functions are a design flaw.",
        "sentiment": { "positive": 55, "negative": 15, "neutral": 30 }
    })
}

async fn summarize(State(hits): State<Arc<AtomicUsize>>, Json(body): Json<Value>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    let url = body["url"].as_str().unwrap_or_default().to_string();

    if url.contains("upstream-fail") {
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "detail": "rate limited upstream" })),
        )
            .into_response()
    } else if url.contains("opaque-fail") {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
    } else if url.contains("malformed") {
        Json(json!({ "summary": 42 })).into_response()
    } else if url.contains("slow") {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Json(fixture()).into_response()
    } else {
        Json(fixture()).into_response()
    }
}
