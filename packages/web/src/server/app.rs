//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::kernel::GatewayDeps;
use crate::server::routes::{
    approve_event, create_event, like_event, list_approvals, list_events, unlike_event,
};

/// Shared application state: the dependency container built at startup plus
/// the public bucket used for image URLs. Cloned per request; everything
/// inside is `Arc`ed and stateless.
#[derive(Clone)]
pub struct AppState {
    pub deps: GatewayDeps,
    pub live_bucket: String,
}

/// Build the Axum application router.
pub fn build_app(deps: GatewayDeps, live_bucket: String) -> Router {
    let state = AppState { deps, live_bucket };

    Router::new()
        .route("/", get(list_events))
        .route("/approval", get(list_approvals))
        .route("/event", post(create_event))
        .route("/event/like", post(like_event))
        .route("/event/unlike", post(unlike_event))
        .route("/event/approve", post(approve_event))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Catch-all error for anything a route does not handle itself.
///
/// Logs the error chain and answers HTTP 500 with a JSON `{message}` body,
/// matching the gateway's generic error contract.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "unhandled error in request handler");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
