use crate::handlers::jwks_handler::{self, AppState};
use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path the JWKS document is published on.
pub const JWKS_PATH: &str = "/api/jwks";

/// Build the publication router.
///
/// Only [`JWKS_PATH`] is routed; every other path falls through to axum's 404.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Method is not checked
        .route(JWKS_PATH, any(jwks_handler::handle_get_jwks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
