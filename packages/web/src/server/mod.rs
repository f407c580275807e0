// HTTP server setup (Axum + HTML views)
pub mod app;
pub mod routes;
pub mod views;

pub use app::*;
