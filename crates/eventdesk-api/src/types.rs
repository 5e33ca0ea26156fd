// Wire types for the event management REST service.
//
// Field names follow the service's camelCase JSON. Timestamps are
// zone-less local date-times (`2024-06-15T10:30:00`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ── Events ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event_id: i64,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub current_participants: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body for `POST /events` and `PUT /events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub location: String,
    pub organizer: String,
    pub max_participants: u32,
}

/// Body for `POST /events/search`. Absent filters are never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_to: Option<NaiveDateTime>,
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_order: String,
}

/// One page of a search.
///
/// Accepts a bare array, or an object carrying the list under `events`
/// or `content` plus optional pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPage")]
pub struct EventPage {
    pub events: Vec<EventResponse>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub page_size: Option<u32>,
    pub has_next: Option<bool>,
    pub has_previous: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage {
    List(Vec<EventResponse>),
    Paged(PagedBody),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedBody {
    #[serde(alias = "content")]
    events: Vec<EventResponse>,
    #[serde(default)]
    total_elements: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    has_next: Option<bool>,
    #[serde(default)]
    has_previous: Option<bool>,
}

impl From<RawPage> for EventPage {
    fn from(raw: RawPage) -> Self {
        match raw {
            RawPage::List(events) => Self {
                events,
                ..Self::default()
            },
            RawPage::Paged(body) => Self {
                events: body.events,
                total_elements: body.total_elements,
                total_pages: body.total_pages,
                current_page: body.current_page,
                page_size: body.page_size,
                has_next: body.has_next,
                has_previous: body.has_previous,
            },
        }
    }
}

// ── Statistics ───────────────────────────────────────────────────────

/// Aggregate counts. Every field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsResponse {
    pub total_events: Option<u64>,
    pub active_events: Option<u64>,
    pub completed_events: Option<u64>,
    pub cancelled_events: Option<u64>,
    pub total_participants: Option<u64>,
    pub average_participants: Option<f64>,
    pub max_participants: Option<u64>,
    pub participation_rate: Option<f64>,
}

// ── Participants ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub participation_id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub participant_name: String,
    #[serde(default)]
    pub participant_email: String,
    #[serde(default)]
    pub participant_phone: Option<String>,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
}

/// Body for `POST /participants/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRequest {
    pub event_id: i64,
    pub participant_name: String,
    pub participant_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_phone: Option<String>,
}
