//! Request dispatcher and middleware setup.

use crate::metrics::SnapshotProvider;
use crate::web::config::ServerConfig;
use crate::web::handlers;
use axum::{
    extract::{Request, State},
    http::{header::CACHE_CONTROL, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::warn;

/// Shared, read-only state handed to the dispatcher.
#[derive(Clone)]
struct AppState {
    provider: Arc<dyn SnapshotProvider>,
    static_files: ServeDir,
    index_path: String,
}

/// Create the application: one dispatcher plus the fixed response headers.
pub fn create_app(config: &ServerConfig, provider: Arc<dyn SnapshotProvider>) -> Router {
    if !config.base_dir.is_dir() {
        warn!(
            "Static directory {:?} does not exist, only the status endpoint will answer",
            config.base_dir
        );
    }

    let state = AppState {
        provider,
        static_files: ServeDir::new(&config.base_dir),
        index_path: config.index_path(),
    };

    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}

/// Whether a request path belongs to the status endpoint.
///
/// Any path that merely starts with the endpoint prefix qualifies, so
/// trailing segments are answered by the status handler too.
pub fn is_status_path(path: &str) -> bool {
    path.starts_with(crate::STATUS_ENDPOINT)
}

async fn dispatch(State(state): State<AppState>, mut request: Request) -> Response {
    if request.method() == Method::GET && is_status_path(request.uri().path()) {
        return handlers::pi_status(state.provider).await;
    }

    rewrite_index(&mut request, &state.index_path);

    // ServeDir never fails with its default fallback.
    match state.static_files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Point `/` and `/index.html` at the configured index document.
fn rewrite_index(request: &mut Request, index_path: &str) {
    let path = request.uri().path().to_string();
    if path != "/" && path != "/index.html" {
        return;
    }

    let target = match request.uri().query() {
        Some(query) => format!("{}?{}", index_path, query),
        None => index_path.to_string(),
    };

    match target.parse::<Uri>() {
        Ok(uri) => *request.uri_mut() = uri,
        Err(e) => warn!("Could not rewrite {} to {}: {}", path, target, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_status_prefix_matching() {
        assert!(is_status_path("/api/pi-status"));
        assert!(is_status_path("/api/pi-status/"));
        assert!(is_status_path("/api/pi-status/history"));
        assert!(is_status_path("/api/pi-statusz"));
        assert!(!is_status_path("/api/pi"));
        assert!(!is_status_path("/index.html"));
        assert!(!is_status_path("/static/api/pi-status"));
    }

    #[test]
    fn test_rewrite_root_to_index() {
        let mut request = Request::builder().uri("/?v=2").body(Body::empty()).unwrap();
        rewrite_index(&mut request, "/dashboard.html");
        assert_eq!(request.uri(), "/dashboard.html?v=2");

        let mut request = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
        rewrite_index(&mut request, "/dashboard.html");
        assert_eq!(request.uri().path(), "/dashboard.html");
    }

    #[test]
    fn test_other_paths_are_untouched() {
        let mut request = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
        rewrite_index(&mut request, "/dashboard.html");
        assert_eq!(request.uri().path(), "/app.js");
    }
}
