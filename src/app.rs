use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/summarize", post(handlers::summarize))
        .route("/new", post(handlers::new_summary))
        .route("/api/state", get(handlers::get_state))
        .route("/api/quota", get(handlers::get_quota))
        .route("/api/platform", get(handlers::get_platform))
        .with_state(state)
}
