// Events front-end gateway.
//
// Renders the public event listing and the moderation page, and forwards
// user actions to the events backend microservice. Images live in object
// storage; moderation approvals arrive over a pull-based message queue.
// Every operation is a single outbound call followed by a render or a
// redirect — there is no state kept between requests.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
