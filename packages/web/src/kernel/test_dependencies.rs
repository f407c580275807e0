// Mock implementations of the Base* traits for testing.
//
// Each mock records its calls into a shared CallLog so tests can assert
// cross-dependency ordering (e.g. approve before acknowledge), and captures
// its arguments for inspection.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use events_api::{CreateEventPayload, Event};

use crate::kernel::{BaseEventsApi, BaseImageStore, BaseModerationQueue, PendingApproval};

// =============================================================================
// Shared call log
// =============================================================================

/// Ordered record of calls across all mocks sharing the log.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

// =============================================================================
// Mock Events Backend
// =============================================================================

pub struct MockEventsApi {
    log: CallLog,
    events: Arc<Mutex<Vec<Event>>>,
    created: Arc<Mutex<Vec<CreateEventPayload>>>,
    fail: bool,
}

impl MockEventsApi {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            events: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Events returned from `list_events`.
    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.lock().unwrap() = events;
        self
    }

    /// Make every call fail, as if the backend were unreachable.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Payloads captured from `create_event`.
    pub fn created(&self) -> Vec<CreateEventPayload> {
        self.created.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            bail!("Error");
        }
        Ok(())
    }
}

#[async_trait]
impl BaseEventsApi for MockEventsApi {
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.log.record("list_events");
        self.check()?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn create_event(&self, payload: &CreateEventPayload) -> Result<serde_json::Value> {
        self.log.record("create_event");
        self.check()?;
        self.created.lock().unwrap().push(payload.clone());
        Ok(serde_json::json!({ "status": 200 }))
    }

    async fn like_event(&self, _body: &HashMap<String, String>) -> Result<serde_json::Value> {
        self.log.record("like_event");
        self.check()?;
        Ok(serde_json::json!({ "status": 200 }))
    }

    async fn unlike_event(&self, _body: &HashMap<String, String>) -> Result<serde_json::Value> {
        self.log.record("unlike_event");
        self.check()?;
        Ok(serde_json::json!({ "status": 200 }))
    }

    async fn approve_event(&self, _body: &HashMap<String, String>) -> Result<serde_json::Value> {
        self.log.record("approve_event");
        self.check()?;
        Ok(serde_json::json!({ "status": 200 }))
    }
}

// =============================================================================
// Mock Moderation Queue
// =============================================================================

pub struct MockModerationQueue {
    log: CallLog,
    pending: Arc<Mutex<Vec<PendingApproval>>>,
    acknowledged: Arc<Mutex<Vec<Vec<String>>>>,
    fail_ack: bool,
}

impl MockModerationQueue {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            pending: Arc::new(Mutex::new(Vec::new())),
            acknowledged: Arc::new(Mutex::new(Vec::new())),
            fail_ack: false,
        }
    }

    /// Messages returned from the next pull.
    pub fn with_pending(self, pending: Vec<PendingApproval>) -> Self {
        *self.pending.lock().unwrap() = pending;
        self
    }

    /// Make acknowledgments fail, leaving messages redeliverable.
    pub fn failing_ack(mut self) -> Self {
        self.fail_ack = true;
        self
    }

    /// Every batch of ids that was acknowledged.
    pub fn acknowledged(&self) -> Vec<Vec<String>> {
        self.acknowledged.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseModerationQueue for MockModerationQueue {
    async fn pull_pending(&self, max_messages: usize) -> Result<Vec<PendingApproval>> {
        self.log.record("pull_pending");
        let pending = self.pending.lock().unwrap();
        Ok(pending.iter().take(max_messages).cloned().collect())
    }

    async fn acknowledge(&self, ack_ids: &[String]) -> Result<()> {
        self.log.record("acknowledge");
        if self.fail_ack {
            bail!("acknowledge failed");
        }
        self.acknowledged.lock().unwrap().push(ack_ids.to_vec());
        Ok(())
    }
}

// =============================================================================
// Mock Image Store
// =============================================================================

pub struct MockImageStore {
    log: CallLog,
    saved: Arc<Mutex<Vec<(String, usize)>>>,
    fail: bool,
}

impl MockImageStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            saved: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Make every write fail, as if the store rejected the stream.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Saved objects as (name, byte count) pairs.
    pub fn saved(&self) -> Vec<(String, usize)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseImageStore for MockImageStore {
    async fn save_image(&self, bytes: Vec<u8>, name: &str) -> Result<()> {
        self.log.record("save_image");
        if self.fail {
            bail!("storage unavailable");
        }
        self.saved.lock().unwrap().push((name.to_string(), bytes.len()));
        Ok(())
    }
}
