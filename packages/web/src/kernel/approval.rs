//! The approval workflow and the public-listing scrub.

use anyhow::Result;
use std::collections::HashMap;

use events_api::{Event, ImageStatus};

use crate::kernel::GatewayDeps;

/// Approve an event's image on the backend, then acknowledge the queue
/// message identified by the submitted id.
///
/// The two steps are strictly ordered and each failure short-circuits the
/// next: if the backend call fails the message is never acknowledged (and
/// stays redeliverable), and an acknowledgment failure surfaces to the
/// caller rather than being swallowed.
pub async fn approve_and_acknowledge(
    deps: &GatewayDeps,
    form: &HashMap<String, String>,
) -> Result<()> {
    let body = deps.events.approve_event(form).await?;
    tracing::debug!(%body, "backend approve response");

    let ack_ids: Vec<String> = form.get("id").cloned().into_iter().collect();
    deps.moderation.acknowledge(&ack_ids).await?;
    Ok(())
}

/// Blank out every image reference that has not passed moderation, so the
/// public listing only ever links approved images.
pub fn scrub_unapproved(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .map(|mut event| {
            if event.image_status() != ImageStatus::Approved {
                event.image.clear();
            }
            event
        })
        .collect()
}
