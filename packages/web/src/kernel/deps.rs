//! Gateway dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! route handler. The concrete clients are constructed once at startup and
//! reused across requests; nothing here is mutable.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use events_api::{CreateEventPayload, Event, EventsApiClient};

use crate::kernel::{BaseEventsApi, BaseImageStore, BaseModerationQueue};

// =============================================================================
// EventsApiClient Adapter (implements BaseEventsApi trait)
// =============================================================================

/// Wrapper around EventsApiClient that implements the BaseEventsApi trait.
pub struct EventsApiAdapter(pub Arc<EventsApiClient>);

impl EventsApiAdapter {
    pub fn new(client: Arc<EventsApiClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseEventsApi for EventsApiAdapter {
    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.0.list_events().await?)
    }

    async fn create_event(&self, payload: &CreateEventPayload) -> Result<serde_json::Value> {
        Ok(self.0.create_event(payload).await?)
    }

    async fn like_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value> {
        Ok(self.0.like_event(body).await?)
    }

    async fn unlike_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value> {
        Ok(self.0.unlike_event(body).await?)
    }

    async fn approve_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value> {
        Ok(self.0.approve_event(body).await?)
    }
}

// =============================================================================
// GatewayDeps
// =============================================================================

/// Gateway dependencies accessible to route handlers.
#[derive(Clone)]
pub struct GatewayDeps {
    /// Outbound calls to the events backend microservice.
    pub events: Arc<dyn BaseEventsApi>,
    /// Pull-based queue delivering pending-approval messages.
    pub moderation: Arc<dyn BaseModerationQueue>,
    /// Durable object storage for uploaded images.
    pub images: Arc<dyn BaseImageStore>,
}

impl GatewayDeps {
    pub fn new(
        events: Arc<dyn BaseEventsApi>,
        moderation: Arc<dyn BaseModerationQueue>,
        images: Arc<dyn BaseImageStore>,
    ) -> Self {
        Self {
            events,
            moderation,
            images,
        }
    }
}
