use crate::observability::metrics::record_jwks_request;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::instrument;

/// Application state shared across handlers
///
/// Built once at startup and never mutated, so it is shared without locks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Serialized JWKS document served verbatim on every request.
    pub jwks_body: Bytes,
}

/// Handle JWKS request
///
/// /api/jwks
///
/// Returns the precomputed JWKS document (RFC 7517) with status 200 and
/// `Content-Type: application/json`. The method is not checked.
#[instrument(name = "jwks.get", skip_all)]
pub async fn handle_get_jwks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    record_jwks_request();

    (
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        state.jwks_body.clone(),
    )
}
