use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventsApiError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("request to events backend failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("events backend returned {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, EventsApiError>;
