use crate::api::{detect_platform, validate_url};
use crate::errors::AppError;
use crate::form::Submission;
use crate::models::{PlatformQuery, PlatformResponse, QuotaResponse, StateResponse, SubmitForm};
use crate::state::AppState;
use crate::ui::{render_index, PageView};
use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ui = state.controller.snapshot().await;
    let form = state.form.lock().await.clone();
    let limiter = state.controller.limiter();

    Html(render_index(&PageView {
        ui: &ui,
        form: &form,
        remaining: limiter.remaining_requests(),
        max: limiter.max_requests(),
    }))
}

pub async fn summarize(
    State(state): State<AppState>,
    Form(payload): Form<SubmitForm>,
) -> Result<Redirect, AppError> {
    let submission = {
        let mut form = state.form.lock().await;
        form.submit(&payload.url, state.controller.limiter())
    };

    match submission {
        Submission::Accepted(url) => {
            let controller = Arc::clone(&state.controller);
            // Spawned so a dropped connection cannot strand the controller in loading.
            let mode = tokio::spawn(async move { controller.submit(&url).await })
                .await
                .map_err(AppError::internal)?;
            info!("submission finished in {} mode", mode.as_str());
        }
        Submission::Rejected(message) => info!("submission rejected: {message}"),
    }

    Ok(Redirect::to("/"))
}

pub async fn new_summary(State(state): State<AppState>) -> Redirect {
    state.controller.new_summary().await;
    state.form.lock().await.clear();
    Redirect::to("/")
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let ui = state.controller.snapshot().await;
    Json(StateResponse {
        mode: ui.mode().as_str().to_string(),
        is_loading: ui.is_loading,
        error: ui.error,
        summary: ui.summary,
    })
}

pub async fn get_quota(State(state): State<AppState>) -> Json<QuotaResponse> {
    let limiter = state.controller.limiter();
    let used = limiter.requests_used();
    Json(QuotaResponse {
        used,
        remaining: limiter.max_requests().saturating_sub(used),
        max: limiter.max_requests(),
    })
}

pub async fn get_platform(Query(query): Query<PlatformQuery>) -> Result<Json<PlatformResponse>, AppError> {
    if query.url.is_empty() {
        return Err(AppError::bad_request("url is required"));
    }

    Ok(Json(PlatformResponse {
        platform: detect_platform(&query.url).to_string(),
        valid: validate_url(&query.url),
    }))
}
