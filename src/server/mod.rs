//! HTTP surface: the paginated jobs endpoint and a health probe.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::app::HirewireError;
use crate::domain::{Cursor, Posting};
use crate::feed::JobFeed;

pub fn router(feed: Arc<JobFeed>) -> Router {
    Router::new()
        .route("/latest-jobs/:fetch_size/:cursor", get(latest_jobs_handler))
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(feed)
}

/// Error envelope for the JSON API.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

struct ApiError(HirewireError);

impl From<HirewireError> for ApiError {
    fn from(e: HirewireError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            HirewireError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

async fn latest_jobs_handler(
    State(feed): State<Arc<JobFeed>>,
    Path((fetch_size, cursor)): Path<(usize, String)>,
) -> Result<Json<Vec<Posting>>, ApiError> {
    let cursor: Cursor = cursor.parse()?;
    let postings = feed.posts(cursor, fetch_size).await?;
    Ok(Json(postings))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    cached_postings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread: Option<ThreadHealth>,
}

#[derive(Serialize)]
struct ThreadHealth {
    story_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    children: usize,
    resolved_at: DateTime<Utc>,
}

/// Reports whether a hiring thread has been resolved and how much of it has
/// been parsed so far. 503 until the first resolution lands.
async fn health_handler(State(feed): State<Arc<JobFeed>>) -> (StatusCode, Json<HealthResponse>) {
    let thread = feed.current_thread();

    let status_code = if thread.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if thread.is_some() { "ok" } else { "no thread" }.to_string(),
        cached_postings: feed.cached_postings(),
        thread: thread.map(|t| ThreadHealth {
            story_id: t.story_id,
            title: t.title.clone(),
            children: t.child_ids.len(),
            resolved_at: t.resolved_at,
        }),
    };

    (status_code, Json(body))
}
