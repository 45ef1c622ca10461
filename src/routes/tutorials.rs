//! Tutorial Catalog Route
//!
//! Fetches every item of the configured playlist, groups the items into
//! tutorials and returns the full catalog. The whole catalog is rebuilt
//! on every request; nothing is cached between requests.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::models::TutorialsResponse;
use crate::services::grouper::TutorialGrouper;
use crate::services::youtube::collect_playlist_items;
use crate::AppState;

/// GET /api/tutorials
pub async fn get_tutorials(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let videos = collect_playlist_items(state.source.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch tutorials: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch tutorials",
                    "message": e.to_string(),
                })),
            )
        })?;

    let tutorials = TutorialGrouper::group(&videos);
    let total_videos = videos.len();
    let total_tutorials = tutorials.len();

    Ok(Json(TutorialsResponse {
        success: true,
        tutorials,
        total_videos,
        total_tutorials,
    }))
}

/// OPTIONS /api/tutorials - plain OPTIONS gets an empty 200; CORS
/// preflights are answered by the CORS layer before reaching here
pub async fn preflight() -> impl IntoResponse {
    StatusCode::OK
}

/// Fallback for every other method on the route, reached before any
/// upstream call is attempted
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}
