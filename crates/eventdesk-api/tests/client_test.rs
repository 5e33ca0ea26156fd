#![allow(clippy::unwrap_used)]
// Integration tests for `EventsClient` using wiremock.

use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventdesk_api::client::RequestOptions;
use eventdesk_api::types::{EventRequest, EventSearchRequest, ParticipantRequest};
use eventdesk_api::{Error, EventsClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, EventsClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let client = EventsClient::from_reqwest(&base, reqwest::Client::new()).unwrap();
    (server, client)
}

fn event_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "eventId": id,
        "eventName": name,
        "description": "desc",
        "startDateTime": "2030-06-15T10:30:00",
        "endDateTime": "2030-06-15T12:00:00",
        "location": "Hall A",
        "organizer": "Org",
        "maxParticipants": 10,
        "currentParticipants": 2,
        "status": "ACTIVE",
        "createdAt": "2030-01-01T09:00:00"
    })
}

// ── Envelope handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_events_wrapped_in_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Events retrieved successfully",
            "data": [event_json(1, "One"), event_json(2, "Two")]
        })))
        .mount(&server)
        .await;

    let events = client.list_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, 1);
    assert_eq!(events[1].event_name, "Two");
    assert_eq!(events[0].max_participants, Some(10));
}

#[tokio::test]
async fn test_list_events_bare_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(7, "Bare")])))
        .mount(&server)
        .await;

    let events = client.list_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, 7);
}

#[tokio::test]
async fn test_get_event_direct_entity() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_json(3, "Direct")))
        .mount(&server)
        .await;

    let event = client.get_event(3).await.unwrap();
    assert_eq!(event.event_name, "Direct");
    assert_eq!(event.status.as_deref(), Some("ACTIVE"));
}

#[tokio::test]
async fn test_search_events_paged_result() {
    let (server, client) = setup().await;

    let request = EventSearchRequest {
        keyword: Some("rust".into()),
        page: 1,
        size: 10,
        sort_by: "startDateTime".into(),
        sort_order: "desc".into(),
        ..EventSearchRequest::default()
    };

    Mock::given(method("POST"))
        .and(path("/api/events/search"))
        .and(body_json(json!({
            "keyword": "rust",
            "page": 1,
            "size": 10,
            "sortBy": "startDateTime",
            "sortOrder": "desc"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "events": [event_json(4, "Found")],
                "totalElements": 11,
                "totalPages": 2,
                "currentPage": 1,
                "pageSize": 10,
                "hasNext": false,
                "hasPrevious": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.search_events(&request).await.unwrap();

    assert_eq!(page.events.len(), 1);
    assert_eq!(page.total_pages, Some(2));
    assert_eq!(page.has_next, Some(false));
    assert_eq!(page.has_previous, Some(true));
}

#[tokio::test]
async fn test_search_events_content_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/events/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "content": [event_json(5, "Spring")] })),
        )
        .mount(&server)
        .await;

    let page = client
        .search_events(&EventSearchRequest::default())
        .await
        .unwrap();
    assert_eq!(page.events[0].event_id, 5);
    assert_eq!(page.total_pages, None);
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_event_posts_camel_case_body() {
    let (server, client) = setup().await;

    let request = EventRequest {
        event_name: "Demo".into(),
        description: None,
        start_date_time: "2030-06-15T10:30:00".parse().unwrap(),
        end_date_time: "2030-06-15T12:00:00".parse().unwrap(),
        location: "Hall A".into(),
        organizer: "Org".into(),
        max_participants: 10,
    };

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_json(json!({
            "eventName": "Demo",
            "startDateTime": "2030-06-15T10:30:00",
            "endDateTime": "2030-06-15T12:00:00",
            "location": "Hall A",
            "organizer": "Org",
            "maxParticipants": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": event_json(9, "Demo")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_event(&request).await.unwrap();
    assert_eq!(created.event_id, 9);
}

#[tokio::test]
async fn test_delete_event_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/events/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_event(5).await.unwrap();
}

#[tokio::test]
async fn test_register_participant() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/participants/register"))
        .and(body_json(json!({
            "eventId": 3,
            "participantName": "Hana",
            "participantEmail": "hana@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "participationId": 12,
                "eventId": 3,
                "participantName": "Hana",
                "participantEmail": "hana@example.com"
            }
        })))
        .mount(&server)
        .await;

    let participant = client
        .register_participant(&ParticipantRequest {
            event_id: 3,
            participant_name: "Hana".into(),
            participant_email: "hana@example.com".into(),
            participant_phone: None,
        })
        .await
        .unwrap();

    assert_eq!(participant.participation_id, 12);
    assert_eq!(participant.participant_phone, None);
}

#[tokio::test]
async fn test_cancel_by_email_encodes_segment() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/participants/cancel/event/3/email/a%20b@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .cancel_participation_by_email(3, "a b@example.com")
        .await
        .unwrap();
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_carries_status_and_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Event not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_event(404).await.unwrap_err();

    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Event not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.statistics().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_raw_request_with_leading_slash() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/events/8"))
        .and(body_json(json!({ "eventName": "X" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ok": 1 } })))
        .mount(&server)
        .await;

    let value = client
        .request(
            "/events/8",
            RequestOptions::method(Method::PUT)
                .json(&json!({ "eventName": "X" }))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(value, json!({ "ok": 1 }));
}

#[tokio::test]
async fn test_raw_request_keeps_query_string() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("status", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client
        .request("/events?status=ACTIVE", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn test_nested_data_field_is_unwrapped_once() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "data": 1, "totalEvents": 4 }
        })))
        .mount(&server)
        .await;

    let stats = client.statistics().await.unwrap();
    assert_eq!(stats.total_events, Some(4));

    let raw = client
        .request("/events/statistics", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(raw, json!({ "data": 1, "totalEvents": 4 }));
}
