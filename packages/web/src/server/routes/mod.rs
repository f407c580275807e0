// HTTP routes
pub mod approval;
pub mod events;

pub use approval::*;
pub use events::*;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// 302 back to the listing page, the terminal step of every mutation route.
pub(crate) fn redirect_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}
