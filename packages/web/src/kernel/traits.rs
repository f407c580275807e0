// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Route handlers
// and the approval workflow use these, never the concrete clients, so tests
// can swap in the mocks from test_dependencies.
//
// Naming convention: Base* for trait names (e.g., BaseEventsApi)

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use events_api::{CreateEventPayload, Event};

/// A message delivered by the moderation queue: the candidate image plus
/// the opaque token needed to acknowledge (remove) the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingApproval {
    pub image: String,
    pub ack_id: String,
}

// =============================================================================
// Events Backend (outbound REST calls)
// =============================================================================

#[async_trait]
pub trait BaseEventsApi: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>>;

    async fn create_event(&self, payload: &CreateEventPayload) -> Result<serde_json::Value>;

    async fn like_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value>;

    async fn unlike_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value>;

    async fn approve_event(&self, body: &HashMap<String, String>) -> Result<serde_json::Value>;
}

// =============================================================================
// Moderation Queue (pull + acknowledge)
// =============================================================================

#[async_trait]
pub trait BaseModerationQueue: Send + Sync {
    /// Pull at most `max_messages` pending-approval messages. Returns
    /// immediately with whatever is available, possibly nothing.
    async fn pull_pending(&self, max_messages: usize) -> Result<Vec<PendingApproval>>;

    /// Acknowledge delivered messages in one batch. Must be a no-op for an
    /// empty list. A message stays redeliverable until this succeeds.
    async fn acknowledge(&self, ack_ids: &[String]) -> Result<()>;
}

// =============================================================================
// Image Store (durable object storage)
// =============================================================================

#[async_trait]
pub trait BaseImageStore: Send + Sync {
    /// Write the full image under `name`, resolving once the store has
    /// confirmed durability.
    async fn save_image(&self, bytes: Vec<u8>, name: &str) -> Result<()>;
}
