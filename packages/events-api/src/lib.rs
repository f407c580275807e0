//! REST client for the events backend microservice.
//!
//! One method per backend endpoint, exactly one HTTP request per call, JSON
//! in and out. There are no retries: a transport error or non-success status
//! is surfaced to the caller on the first attempt.
//!
//! # Example
//!
//! ```rust,ignore
//! use events_api::EventsApiClient;
//!
//! let client = EventsApiClient::new("http://localhost:8082".into());
//! for event in client.list_events().await? {
//!     println!("{} ({} likes)", event.title, event.likes);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{EventsApiError, Result};
pub use types::{CreateEventPayload, Event, EventsResponse, ImageStatus, APPROVED_IMAGE_PREFIX};

use std::collections::HashMap;

use serde_json::Value;

pub struct EventsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventsApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch every event the backend knows about.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.base_url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EventsApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: EventsResponse = resp.json().await?;
        Ok(envelope.events)
    }

    /// Create a new event. `file_name` in the payload is empty when no
    /// image was uploaded alongside the form.
    pub async fn create_event(&self, payload: &CreateEventPayload) -> Result<Value> {
        let url = format!("{}/event", self.base_url);
        let resp = self.client.post(&url).json(payload).send().await?;
        Self::passthrough(resp).await
    }

    /// Record a like. The urlencoded form body is forwarded verbatim as JSON.
    pub async fn like_event(&self, body: &HashMap<String, String>) -> Result<Value> {
        let url = format!("{}/event/like", self.base_url);
        let resp = self.client.put(&url).json(body).send().await?;
        Self::passthrough(resp).await
    }

    /// Remove a like. Delete semantics with a JSON body, matching the
    /// backend's contract.
    pub async fn unlike_event(&self, body: &HashMap<String, String>) -> Result<Value> {
        let url = format!("{}/event/like", self.base_url);
        let resp = self.client.delete(&url).json(body).send().await?;
        Self::passthrough(resp).await
    }

    /// Mark an event's image as approved.
    pub async fn approve_event(&self, body: &HashMap<String, String>) -> Result<Value> {
        let url = format!("{}/event/approve", self.base_url);
        let resp = self.client.put(&url).json(body).send().await?;
        Self::passthrough(resp).await
    }

    /// Mutation responses are passed back to the caller raw; the gateway
    /// only logs them. Non-JSON success bodies become `Value::Null`.
    async fn passthrough(resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EventsApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp.json().await.unwrap_or(Value::Null))
    }
}
