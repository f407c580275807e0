use serde::{Deserialize, Deserializer, Serialize};

/// Image names starting with this prefix have passed moderation and may be
/// shown to end users. The prefix is assigned by the thumbnail pipeline on
/// the backend side; everything else is still awaiting approval.
pub const APPROVED_IMAGE_PREFIX: &str = "thumb";

/// Moderation status of an event's image, derived from its storage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// No image attached.
    Missing,
    /// Attached but not yet approved by a moderator.
    Pending,
    /// Carries the approved prefix and may be rendered publicly.
    Approved,
}

/// An event as owned by the backend microservice. Held only as an ephemeral
/// per-request copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub datetime_added: String,
    #[serde(default)]
    pub image: String,
}

impl Event {
    pub fn image_status(&self) -> ImageStatus {
        if self.image.is_empty() {
            ImageStatus::Missing
        } else if self.image.starts_with(APPROVED_IMAGE_PREFIX) {
            ImageStatus::Approved
        } else {
            ImageStatus::Pending
        }
    }
}

/// Envelope returned by `GET /events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Body of `POST /event`. `file_name` is empty when no image was uploaded.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// The backend sends event ids as either JSON numbers or strings; treat
/// them as opaque and normalize to `String`.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_status_from_name() {
        let mut event: Event = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "a mock event",
            "image": ""
        }))
        .unwrap();
        assert_eq!(event.image_status(), ImageStatus::Missing);

        event.image = "holiday-snap.jpg".into();
        assert_eq!(event.image_status(), ImageStatus::Pending);

        event.image = "thumb-holiday-snap.jpg".into();
        assert_eq!(event.image_status(), ImageStatus::Approved);
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let event: Event =
            serde_json::from_value(serde_json::json!({ "id": 4321, "title": "t" })).unwrap();
        assert_eq!(event.id, "4321");

        let event: Event =
            serde_json::from_value(serde_json::json!({ "id": "ev-17", "title": "t" })).unwrap();
        assert_eq!(event.id, "ev-17");
    }
}
