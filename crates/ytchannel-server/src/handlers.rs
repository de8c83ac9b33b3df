//! Request handlers and error mapping for the channel videos API

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use ytchannel_core::{ChannelVideos, ScrapeError};

use crate::AppState;

const DEFAULT_MAX_RESULTS: u32 = 20;
const MAX_MAX_RESULTS: u32 = 50;

/// API failure carrying the status code and a human-readable detail
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(error: ScrapeError) -> Self {
        let status = match &error {
            ScrapeError::NotFound(_) => StatusCode::NOT_FOUND,
            ScrapeError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ScrapeError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ScrapeError::Transport(_) | ScrapeError::NoDataBlob(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            error!(%error, "channel videos request failed");
        }
        Self::new(status, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct VideosQuery {
    max_results: Option<u32>,
}

/// GET /api/channel/{channel_id}/videos
///
/// Fetches the channel's public video listing. `max_results` defaults to
/// 20 and must be within 1..=50; out-of-range values are rejected before
/// any fetch happens.
pub async fn get_channel_videos(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Query(query): Query<VideosQuery>,
) -> Result<Json<ChannelVideos>, ApiError> {
    let max_results = query.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if !(1..=MAX_MAX_RESULTS).contains(&max_results) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            format!(
                "max_results must be between 1 and {}, got {}",
                MAX_MAX_RESULTS, max_results
            ),
        ));
    }

    let result = state
        .scraper
        .channel_videos(&channel_id, max_results as usize)
        .await?;

    Ok(Json(result))
}

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "YouTube Channel Scraper API" }))
}
