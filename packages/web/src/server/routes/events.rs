//! The listing page and the event mutation routes.
//!
//! Mutation routes forward the submitted form to the backend and redirect
//! back to the listing no matter what the backend said; a failed call is
//! logged and otherwise ignored. Only the listing route renders backend
//! failures, and it does so as a 200 error page rather than a 5xx.

use std::collections::HashMap;

use axum::extract::{Extension, Form, Multipart};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use events_api::CreateEventPayload;

use crate::kernel::scrub_unapproved;
use crate::server::app::{AppError, AppState};
use crate::server::routes::redirect_home;
use crate::server::views;

/// GET `/`
pub async fn list_events(Extension(state): Extension<AppState>) -> Html<String> {
    match state.deps.events.list_events().await {
        Ok(events) => {
            let events = scrub_unapproved(events);
            Html(views::home(&events, &state.live_bucket))
        }
        Err(err) => {
            tracing::warn!(error = ?err, "failed to fetch events from backend");
            Html(views::error_message(&err.to_string()))
        }
    }
}

/// POST `/event` (multipart form)
pub async fn create_event(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut location = String::new();
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = field.text().await?,
            "description" => description = field.text().await?,
            "location" => location = field.text().await?,
            _ => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    file_bytes = Some(bytes.to_vec());
                }
            }
        }
    }

    // Best-effort upload: a storage failure must not block event creation,
    // so the event just goes in without an image.
    let mut file_name = String::new();
    if let Some(bytes) = file_bytes {
        let name = format!("{}.jpg", Uuid::new_v4());
        match state.deps.images.save_image(bytes, &name).await {
            Ok(()) => file_name = name,
            Err(err) => {
                tracing::warn!(error = ?err, "image upload failed, creating event without image");
            }
        }
    }

    let payload = CreateEventPayload {
        title,
        description,
        location,
        file_name,
    };
    match state.deps.events.create_event(&payload).await {
        Ok(body) => tracing::debug!(%body, "backend create response"),
        Err(err) => tracing::warn!(error = ?err, "create event call failed"),
    }
    Ok(redirect_home())
}

/// POST `/event/like`
pub async fn like_event(
    Extension(state): Extension<AppState>,
    Form(body): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    match state.deps.events.like_event(&body).await {
        Ok(body) => tracing::debug!(%body, "backend like response"),
        Err(err) => tracing::warn!(error = ?err, "like call failed"),
    }
    redirect_home()
}

/// POST `/event/unlike`
pub async fn unlike_event(
    Extension(state): Extension<AppState>,
    Form(body): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    match state.deps.events.unlike_event(&body).await {
        Ok(body) => tracing::debug!(%body, "backend unlike response"),
        Err(err) => tracing::warn!(error = ?err, "unlike call failed"),
    }
    redirect_home()
}
