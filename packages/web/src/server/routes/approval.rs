//! The moderation page and the approve route.

use std::collections::HashMap;

use axum::extract::{Extension, Form};
use axum::response::{Html, IntoResponse};

use crate::kernel::approve_and_acknowledge;
use crate::server::app::{AppError, AppState};
use crate::server::routes::redirect_home;
use crate::server::views;

/// GET `/approval` — pull up to one pending message and render it. A queue
/// failure here falls through to the generic 500 handler.
pub async fn list_approvals(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let pending = state.deps.moderation.pull_pending(1).await?;
    Ok(Html(views::images(&pending, &state.live_bucket)))
}

/// POST `/event/approve` — backend approve, then acknowledge the queue
/// message for the submitted id, strictly in that order. Either failure
/// surfaces as a 500; the redirect only happens once the acknowledgment
/// has resolved.
pub async fn approve_event(
    Extension(state): Extension<AppState>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    approve_and_acknowledge(&state.deps, &body).await?;
    Ok(redirect_home())
}
