// Shared harness for gateway HTTP tests.
//
// Two ways to build the app: `mock_app` wires the Mock* dependencies so
// tests can capture calls and force failures; `backend_app` wires the real
// events-api client against a stubbed backend URL (wiremock), with the
// queue and store still mocked.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use events_api::EventsApiClient;
use events_web::kernel::{
    CallLog, EventsApiAdapter, GatewayDeps, MockEventsApi, MockImageStore, MockModerationQueue,
};
use events_web::server::build_app;

pub const LIVE_BUCKET: &str = "live-bucket";

pub struct MockHarness {
    pub app: Router,
    pub log: CallLog,
    pub events: Arc<MockEventsApi>,
    pub moderation: Arc<MockModerationQueue>,
    pub images: Arc<MockImageStore>,
}

/// App with every dependency mocked.
pub fn mock_app(
    events: MockEventsApi,
    moderation: MockModerationQueue,
    images: MockImageStore,
    log: CallLog,
) -> MockHarness {
    let events = Arc::new(events);
    let moderation = Arc::new(moderation);
    let images = Arc::new(images);
    let deps = GatewayDeps::new(events.clone(), moderation.clone(), images.clone());
    MockHarness {
        app: build_app(deps, LIVE_BUCKET.to_string()),
        log,
        events,
        moderation,
        images,
    }
}

/// App with the real reqwest-backed events client pointed at `backend_url`.
pub fn backend_app(backend_url: String) -> Router {
    let log = CallLog::new();
    let client = Arc::new(EventsApiClient::new(backend_url));
    let deps = GatewayDeps::new(
        Arc::new(EventsApiAdapter::new(client)),
        Arc::new(MockModerationQueue::new(log.clone())),
        Arc::new(MockImageStore::new(log)),
    );
    build_app(deps, LIVE_BUCKET.to_string())
}

/// Issue a GET and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// POST a urlencoded form and return (status, Location header, body).
pub async fn post_form(
    app: &Router,
    uri: &str,
    form: &str,
) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a multipart form built from (name, filename, value) parts.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    parts: &[(&str, Option<&str>, &[u8])],
) -> (StatusCode, Option<String>, String) {
    const BOUNDARY: &str = "gateway-test-boundary";
    let mut body: Vec<u8> = Vec::new();
    for (name, filename, value) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: image/jpeg\r\n\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8_lossy(&bytes).into_owned())
}
