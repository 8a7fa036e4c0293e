//! HTTP handlers for the status endpoint.

use crate::metrics::SnapshotProvider;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Content type of the status endpoint.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Collect a fresh snapshot and answer with it as JSON.
///
/// Collection runs on the blocking pool since every reader does
/// synchronous file or socket I/O. Non-ASCII text is written literally.
pub async fn pi_status(provider: Arc<dyn SnapshotProvider>) -> Response {
    let snapshot = match tokio::task::spawn_blocking(move || provider.snapshot()).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Snapshot collection task failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match serde_json::to_vec(&snapshot) {
        Ok(body) => (
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serialize snapshot: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
