//! HTTP API over the in-memory snapshot.
//!
//! Four routes, mirroring the pipeline's operations:
//!
//! | Method | Path | Behavior |
//! |--------|------|----------|
//! | GET | `/news` | Current snapshot's article list (404 when empty) |
//! | POST | `/update-news` | Force a fresh extraction, replacing the snapshot |
//! | POST | `/send-email` | Email the current snapshot as a digest |
//! | GET | `/status` | Snapshot metadata |
//!
//! Handlers never panic: every failure is logged and converted into an
//! HTTP status with a short JSON reason body, and a failed refresh leaves
//! the previous snapshot in place.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::Local;
use serde_json::json;
use tracing::{info, warn};

use crate::mailer::Mailer;
use crate::models::DATETIME_FORMAT;
use crate::scrapers::adrenaline;
use crate::state::NewsState;

/// State shared by all handlers and the scheduler.
pub struct AppState {
    /// HTTP client with the fixed browser headers and timeout.
    pub client: reqwest::Client,
    /// The listing page to scrape.
    pub news_url: String,
    /// The guarded snapshot.
    pub news: NewsState,
}

/// Build the API router around shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/news", get(get_news))
        .route("/update-news", post(update_news))
        .route("/send-email", post(send_email))
        .route("/status", get(get_status))
        .with_state(state)
}

/// Bind and serve the API until the process exits.
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> std::io::Result<()> {
    let app = router(state).layer(
        tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            },
        ),
    );

    let addr = format!("{host}:{port}");
    info!("API listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}

async fn get_news(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.news.snapshot().await;
    if snapshot.articles.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no news available" })),
        )
            .into_response();
    }
    Json(snapshot.articles).into_response()
}

async fn update_news(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match adrenaline::fetch_articles(&state.client, &state.news_url).await {
        Ok(articles) => {
            let count = articles.len();
            let updated_at = state.news.replace(articles).await;
            Json(json!({
                "status": "success",
                "message": "news updated",
                "timestamp": updated_at.format(DATETIME_FORMAT).to_string(),
                "total_news": count,
            }))
            .into_response()
        }
        Err(e) => {
            warn!(error = %e, "News refresh failed; keeping previous snapshot");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("failed to refresh news: {e}") })),
            )
                .into_response()
        }
    }
}

async fn send_email(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.news.snapshot().await;
    if snapshot.articles.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no news available to send" })),
        )
            .into_response();
    }

    // Mail settings are loaded per attempt; an incomplete environment
    // fails this operation only, not the server.
    let mailer = match Mailer::from_env() {
        Ok(mailer) => mailer,
        Err(e) => {
            warn!(error = %e, "Digest not sent");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    match mailer.send_digest(&snapshot.articles).await {
        Ok(()) => Json(json!({
            "status": "success",
            "message": "email sent",
            "timestamp": Local::now().format(DATETIME_FORMAT).to_string(),
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Digest delivery failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("failed to send email: {e}") })),
            )
                .into_response()
        }
    }
}

async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.news.snapshot().await;
    Json(json!({
        "last_update": snapshot.last_updated_display(),
        "total_news": snapshot.articles.len(),
        "has_news": !snapshot.articles.is_empty(),
    }))
}
