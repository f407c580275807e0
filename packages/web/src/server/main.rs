// Main entry point for the events front-end gateway

use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use events_api::EventsApiClient;
use events_web::kernel::{EventsApiAdapter, GatewayDeps, S3ImageStore, SqsModerationQueue};
use events_web::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,events_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting events front-end gateway");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = %config.backend_url, "Configuration loaded");

    // Construct the shared clients once; they are stateless connection-pool
    // wrappers and are reused across all concurrent requests.
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3 = aws_sdk_s3::Client::new(&aws_config);
    let sqs = aws_sdk_sqs::Client::new(&aws_config);
    let events = Arc::new(EventsApiClient::new(config.backend_url.clone()));

    let deps = GatewayDeps::new(
        Arc::new(EventsApiAdapter::new(events)),
        Arc::new(SqsModerationQueue::new(
            sqs,
            config.moderation_queue_url.clone(),
        )),
        Arc::new(S3ImageStore::new(s3, config.bucket.clone())),
    );

    // Build application
    let app = build_app(deps, config.live_bucket.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Events app listening at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
