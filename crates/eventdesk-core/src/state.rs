// ── Session state ──
//
// Everything the controller knows about the current session. Ephemeral:
// rebuilt from the server on navigation, never persisted.

use chrono::NaiveDateTime;
use eventdesk_api::types::{EventPage, EventRequest, ParticipantRequest};
use serde::Serialize;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::CoreError;
use crate::model::{Event, EventId, Participant, Statistics};
use crate::search::SearchFilter;
use crate::view::View;

/// How many events the dashboard lists under "recent".
pub const RECENT_EVENTS: usize = 5;

// ── AppState ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    /// Zero-based search page.
    pub page: u32,
    pub page_size: u32,
    /// Target of edit, detail and registration flows. `None` means the
    /// form creates rather than updates.
    pub selected_event: Option<EventId>,
    pub events: Vec<Event>,
    pub statistics: Statistics,
    pub filter: SearchFilter,
    /// Pagination metadata of the last search, if the server sent any.
    pub last_page: Option<PageInfo>,
    pub details: Option<DetailPanel>,
    pub form: EventForm,
    pub participant_form: ParticipantForm,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new(page_size: u32) -> Self {
        Self {
            view: View::default(),
            page: 0,
            page_size: page_size.max(1),
            selected_event: None,
            events: Vec::new(),
            statistics: Statistics::default(),
            filter: SearchFilter::default(),
            last_page: None,
            details: None,
            form: EventForm::default(),
            participant_form: ParticipantForm::default(),
        }
    }

    /// Whether the event form will issue an update.
    pub fn is_editing(&self) -> bool {
        self.selected_event.is_some()
    }
}

/// Server-side pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub has_next: Option<bool>,
    pub has_previous: Option<bool>,
}

impl From<&EventPage> for PageInfo {
    fn from(page: &EventPage) -> Self {
        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

/// The open event detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub event: Event,
    pub participants: Vec<Participant>,
}

// ── Dashboard ──────────────────────────────────────────────────────

/// Counters and the recent list shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub active_events: usize,
    pub upcoming_events: usize,
    pub total_participants: u64,
    pub recent: Vec<Event>,
}

impl DashboardSummary {
    /// Derive the dashboard from the fetched events and statistics.
    /// "Upcoming" is relative to `now`.
    pub fn compute(events: &[Event], stats: &Statistics, now: NaiveDateTime) -> Self {
        let mut recent: Vec<Event> = events.to_vec();
        // Stable sort: ties keep server order. Missing keys sort last.
        recent.sort_by(|a, b| b.recency().cmp(&a.recency()));
        recent.truncate(RECENT_EVENTS);

        Self {
            total_events: events.len(),
            active_events: events.iter().filter(|e| e.status.is_active()).count(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count(),
            total_participants: stats.total_participants.unwrap_or(0),
            recent,
        }
    }
}

// ── Event form ─────────────────────────────────────────────────────

/// Contents of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub location: String,
    pub organizer: String,
    pub capacity: u32,
}

impl EventForm {
    /// Prefill from an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: event.start,
            end: event.end,
            location: event.location.clone(),
            organizer: event.organizer.clone(),
            capacity: event.capacity,
        }
    }

    /// Validate and build the create/update body.
    pub fn to_request(&self) -> Result<EventRequest, CoreError> {
        let name = required("eventName", &self.name)?;
        let location = required("location", &self.location)?;
        let organizer = required("organizer", &self.organizer)?;
        if self.capacity == 0 {
            return Err(CoreError::validation(
                "maxParticipants",
                "must be at least 1",
            ));
        }
        let start = self
            .start
            .ok_or_else(|| CoreError::validation("startDateTime", "is required"))?;
        let end = self
            .end
            .ok_or_else(|| CoreError::validation("endDateTime", "is required"))?;
        if end <= start {
            return Err(CoreError::validation(
                "endDateTime",
                "must be after the start date-time",
            ));
        }

        let description = self.description.trim();
        Ok(EventRequest {
            event_name: name,
            description: (!description.is_empty()).then(|| description.to_owned()),
            start_date_time: start,
            end_date_time: end,
            location,
            organizer,
            max_participants: self.capacity,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CoreError::validation(field, "must not be blank"))
    } else {
        Ok(trimmed.to_owned())
    }
}

// ── Participant form ───────────────────────────────────────────────

/// Contents of the registration form in the detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ParticipantForm {
    /// Validate and build the registration body for `event`.
    pub fn to_request(&self, event: EventId) -> Result<ParticipantRequest, CoreError> {
        let name = required("participantName", &self.name)?;
        let email = required("participantEmail", &self.email)?;
        if !email.contains('@') {
            return Err(CoreError::validation(
                "participantEmail",
                "must be a valid email address",
            ));
        }

        let phone = self.phone.trim();
        let phone_ok = phone
            .chars()
            .all(|c| c.is_ascii_digit() || "-+() ".contains(c));
        if !phone_ok {
            return Err(CoreError::validation(
                "participantPhone",
                "may only contain digits, spaces and -+()",
            ));
        }

        Ok(ParticipantRequest {
            event_id: event.0,
            participant_name: name,
            participant_email: email,
            participant_phone: (!phone.is_empty()).then(|| phone.to_owned()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EventStatus;
    use pretty_assertions::assert_eq;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn event(id: i64, created: Option<&str>, start: &str, status: EventStatus) -> Event {
        Event {
            id: EventId(id),
            name: format!("event {id}"),
            description: None,
            start: Some(at(start)),
            end: None,
            location: "Hall".into(),
            organizer: "Org".into(),
            capacity: 10,
            participant_count: 1,
            status,
            created_at: created.map(at),
            updated_at: None,
        }
    }

    fn demo_form() -> EventForm {
        EventForm {
            name: "Demo".into(),
            description: String::new(),
            start: Some(at("2030-06-15T10:00:00")),
            end: Some(at("2030-06-15T12:00:00")),
            location: "Hall A".into(),
            organizer: "Org".into(),
            capacity: 10,
        }
    }

    #[test]
    fn dashboard_counts_and_recent_order() {
        let now = at("2030-01-01T00:00:00");
        let events = vec![
            event(1, Some("2029-01-01T00:00:00"), "2029-06-01T00:00:00", EventStatus::Active),
            event(2, None, "2031-01-01T00:00:00", EventStatus::Active),
            event(3, Some("2029-12-01T00:00:00"), "2030-02-01T00:00:00", EventStatus::Completed),
            event(4, Some("2028-01-01T00:00:00"), "2030-03-01T00:00:00", EventStatus::Active),
            event(5, Some("2027-01-01T00:00:00"), "2030-03-01T00:00:00", EventStatus::Cancelled),
            event(6, Some("2026-01-01T00:00:00"), "2030-03-01T00:00:00", EventStatus::Active),
        ];
        let stats = Statistics {
            total_participants: Some(42),
            ..Statistics::default()
        };

        let summary = DashboardSummary::compute(&events, &stats, now);

        assert_eq!(summary.total_events, 6);
        assert_eq!(summary.active_events, 4);
        assert_eq!(summary.upcoming_events, 3);
        assert_eq!(summary.total_participants, 42);
        let ids: Vec<i64> = summary.recent.iter().map(|e| e.id.0).collect();
        // Event 2 has no creation time and falls back to its start.
        assert_eq!(ids, [2, 3, 1, 4, 5]);
    }

    #[test]
    fn event_form_builds_request() {
        let request = demo_form().to_request().unwrap();
        assert_eq!(request.event_name, "Demo");
        assert_eq!(request.max_participants, 10);
        assert_eq!(request.description, None);
    }

    #[test]
    fn event_form_rejects_bad_input() {
        let mut form = demo_form();
        form.end = form.start;
        assert!(matches!(
            form.to_request(),
            Err(CoreError::ValidationFailed { ref field, .. }) if field == "endDateTime"
        ));

        let mut form = demo_form();
        form.capacity = 0;
        assert!(form.to_request().is_err());

        let mut form = demo_form();
        form.name = "   ".into();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn participant_form_validation() {
        let form = ParticipantForm {
            name: "Hana".into(),
            email: "hana@example.com".into(),
            phone: " 090-1234-5678 ".into(),
        };
        let request = form.to_request(EventId(3)).unwrap();
        assert_eq!(request.event_id, 3);
        assert_eq!(request.participant_phone.as_deref(), Some("090-1234-5678"));

        let bad_email = ParticipantForm {
            email: "hana.example.com".into(),
            ..form.clone()
        };
        assert!(bad_email.to_request(EventId(3)).is_err());

        let bad_phone = ParticipantForm {
            phone: "call me".into(),
            ..form
        };
        assert!(bad_phone.to_request(EventId(3)).is_err());
    }
}
