use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables.
///
/// Every variable has a local-development default, so the gateway starts
/// with no environment at all (pointing at a backend on localhost and with
/// storage/queue integration effectively disabled).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the events backend microservice.
    pub backend_url: String,
    /// Write-side object storage bucket for uploaded images.
    pub bucket: String,
    /// Public bucket used to build image URLs in rendered pages.
    pub live_bucket: String,
    /// Queue URL delivering pending-approval messages.
    pub moderation_queue_url: String,
    /// Listen port.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            backend_url: env::var("SERVER")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            bucket: env::var("BUCKET").unwrap_or_default(),
            live_bucket: env::var("LIVE_BUCKET").unwrap_or_default(),
            moderation_queue_url: env::var("MODERATION_QUEUE_URL").unwrap_or_default(),
            port: env::var("SERVICE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("SERVICE_PORT must be a valid number")?,
        })
    }
}
