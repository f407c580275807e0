//! Pull-based moderation queue adapter.
//!
//! Moderation is a human-paced, low-volume workflow, so the gateway pulls a
//! small batch per page load instead of holding a streaming subscription.
//! The queue's receipt handle is the opaque ack token: a message counts as
//! handled only once the batch delete succeeds, and until then redelivery
//! is governed entirely by the queue's own visibility timeout.

use anyhow::{bail, Result};
use async_trait::async_trait;
use aws_sdk_sqs::types::DeleteMessageBatchRequestEntry;
use aws_sdk_sqs::Client as SqsClient;

use crate::kernel::{BaseModerationQueue, PendingApproval};

/// Message attribute carrying the candidate image reference.
const IMAGE_ATTRIBUTE: &str = "image";

pub struct SqsModerationQueue {
    client: SqsClient,
    queue_url: String,
}

impl SqsModerationQueue {
    pub fn new(client: SqsClient, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

#[async_trait]
impl BaseModerationQueue for SqsModerationQueue {
    async fn pull_pending(&self, max_messages: usize) -> Result<Vec<PendingApproval>> {
        let resp = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages as i32)
            .message_attribute_names("All")
            .send()
            .await?;

        let mut pending = Vec::new();
        for message in resp.messages() {
            let image = message
                .message_attributes()
                .and_then(|attrs| attrs.get(IMAGE_ATTRIBUTE))
                .and_then(|attr| attr.string_value())
                .unwrap_or_default()
                .to_string();
            let ack_id = message.receipt_handle().unwrap_or_default().to_string();
            tracing::debug!(%image, "received pending-approval message");
            pending.push(PendingApproval { image, ack_id });
        }
        Ok(pending)
    }

    async fn acknowledge(&self, ack_ids: &[String]) -> Result<()> {
        if ack_ids.is_empty() {
            return Ok(());
        }

        // One batch call covering all ids.
        let mut entries = Vec::with_capacity(ack_ids.len());
        for (index, ack_id) in ack_ids.iter().enumerate() {
            entries.push(
                DeleteMessageBatchRequestEntry::builder()
                    .id(index.to_string())
                    .receipt_handle(ack_id)
                    .build()?,
            );
        }

        let resp = self
            .client
            .delete_message_batch()
            .queue_url(&self.queue_url)
            .set_entries(Some(entries))
            .send()
            .await?;

        let failed = resp.failed();
        if !failed.is_empty() {
            bail!(
                "failed to acknowledge {} of {} moderation messages",
                failed.len(),
                ack_ids.len()
            );
        }
        Ok(())
    }
}
