//! Kernel module - gateway infrastructure and dependencies.

pub mod approval;
pub mod deps;
pub mod image_store;
pub mod moderation_queue;
pub mod test_dependencies;
pub mod traits;

pub use approval::{approve_and_acknowledge, scrub_unapproved};
pub use deps::{EventsApiAdapter, GatewayDeps};
pub use image_store::S3ImageStore;
pub use moderation_queue::SqsModerationQueue;
pub use test_dependencies::{CallLog, MockEventsApi, MockImageStore, MockModerationQueue};
pub use traits::*;
