//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Shell
//! GET  /                              - Console shell (?tab=..., ?login=1)
//!
//! # Auth (credentials checked server-side)
//! GET  /auth/login                    - Login modal fragment
//! POST /auth/login                    - Verify credentials, start session
//! POST /auth/logout                   - End session
//!
//! # Product list (public)
//! GET  /products/list                 - List fragment (?sort=1..4&view=...)
//! GET  /products/details              - Details modal for one card
//! GET  /products/{id}/delete          - Delete confirmation modal
//! POST /products/{id}/delete          - Delete, then re-fetch the list
//!
//! # Product editor (admin only)
//! POST /products                      - Create product
//! POST /products/update               - Update product
//! ```

mod auth;
mod editor;
mod products;
mod shell;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{middleware::create_session_layer, state::AppState};

/// Console routes without state or layers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(shell::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(editor::router())
}

/// Full console application: routes, static assets and sessions.
///
/// Tracing and Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_dir)
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::testing::{RecordingCatalog, body_text, test_state};

    #[tokio::test]
    async fn test_health() {
        let app = app(test_state(Arc::new(RecordingCatalog::default())));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}
