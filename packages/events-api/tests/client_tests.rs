use std::collections::HashMap;

use events_api::{CreateEventPayload, EventsApiClient, EventsApiError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn events_body() -> serde_json::Value {
    json!({
        "status": 200,
        "events": [
            { "id": 1, "title": "a mock event", "description": "really cool",
              "location": "Chez Joe Pizza", "likes": 0,
              "datetime_added": "2022-02-01:12:00", "image": "" },
            { "id": 2, "title": "another mock event", "description": "even cooler",
              "location": "Chez John Pizza", "likes": 3,
              "datetime_added": "2022-02-01:12:00", "image": "thumb-pizza.jpg" },
        ]
    })
}

#[tokio::test]
async fn list_events_parses_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .mount(&server)
        .await;

    let client = EventsApiClient::new(server.uri());
    let events = client.list_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "1");
    assert_eq!(events[0].title, "a mock event");
    assert_eq!(events[1].likes, 3);
    assert_eq!(events[1].image, "thumb-pizza.jpg");
}

#[tokio::test]
async fn list_events_surfaces_non_success_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend down"))
        .mount(&server)
        .await;

    let client = EventsApiClient::new(server.uri());
    match client.list_events().await {
        Err(EventsApiError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "backend down");
        }
        other => panic!("expected Api error, got {:?}", other.map(|e| e.len())),
    }
}

#[tokio::test]
async fn create_event_posts_json() {
    let server = MockServer::start().await;
    let payload = CreateEventPayload {
        title: "test event".into(),
        description: "even cooler test".into(),
        location: "Some Test Place".into(),
        file_name: String::new(),
    };
    Mock::given(method("POST"))
        .and(path("/event"))
        .and(body_json(json!({
            "title": "test event",
            "description": "even cooler test",
            "location": "Some Test Place",
            "fileName": "",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsApiClient::new(server.uri());
    let body = client.create_event(&payload).await.unwrap();
    assert_eq!(body["status"], 200);
}

#[tokio::test]
async fn like_and_unlike_forward_the_form_body() {
    let server = MockServer::start().await;
    let mut form = HashMap::new();
    form.insert("id".to_string(), "1234".to_string());

    Mock::given(method("PUT"))
        .and(path("/event/like"))
        .and(body_json(json!({ "id": "1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/event/like"))
        .and(body_json(json!({ "id": "1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsApiClient::new(server.uri());
    client.like_event(&form).await.unwrap();
    client.unlike_event(&form).await.unwrap();
}

#[tokio::test]
async fn approve_event_puts_to_the_approve_endpoint() {
    let server = MockServer::start().await;
    let mut form = HashMap::new();
    form.insert("id".to_string(), "ack-123".to_string());
    form.insert("image".to_string(), "party.jpg".to_string());

    Mock::given(method("PUT"))
        .and(path("/event/approve"))
        .and(body_json(json!({ "id": "ack-123", "image": "party.jpg" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsApiClient::new(server.uri());
    client.approve_event(&form).await.unwrap();
}

#[tokio::test]
async fn transport_errors_surface_to_the_caller() {
    // Nothing is listening on this port.
    let client = EventsApiClient::new("http://127.0.0.1:1".into());
    match client.list_events().await {
        Err(EventsApiError::Http(_)) => {}
        other => panic!("expected Http error, got {:?}", other.map(|e| e.len())),
    }
}
