// ── API-to-domain type conversions ──
//
// Bridges `eventdesk_api` wire types into `eventdesk_core::model` domain
// types. Counts the server omits become 0, status codes become
// `EventStatus`, and raw ids gain their newtypes.

use eventdesk_api::types::{EventResponse, ParticipantResponse, StatisticsResponse};

use crate::model::{Event, EventId, EventStatus, Participant, ParticipationId, Statistics};

// ── Event ──────────────────────────────────────────────────────────

impl From<EventResponse> for Event {
    fn from(e: EventResponse) -> Self {
        Event {
            id: EventId(e.event_id),
            name: e.event_name,
            description: e.description.filter(|d| !d.is_empty()),
            start: e.start_date_time,
            end: e.end_date_time,
            location: e.location,
            organizer: e.organizer,
            capacity: e.max_participants.unwrap_or(0),
            participant_count: e.current_participants.unwrap_or(0),
            status: e.status.map(EventStatus::from).unwrap_or_default(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

// ── Participant ────────────────────────────────────────────────────

impl From<ParticipantResponse> for Participant {
    fn from(p: ParticipantResponse) -> Self {
        Participant {
            id: ParticipationId(p.participation_id),
            event_id: p.event_id.map(EventId),
            name: p.participant_name,
            email: p.participant_email,
            phone: p.participant_phone.filter(|ph| !ph.is_empty()),
            registered_at: p.registered_at,
        }
    }
}

// ── Statistics ─────────────────────────────────────────────────────

impl From<StatisticsResponse> for Statistics {
    fn from(s: StatisticsResponse) -> Self {
        Statistics {
            total_events: s.total_events,
            active_events: s.active_events,
            completed_events: s.completed_events,
            cancelled_events: s.cancelled_events,
            total_participants: s.total_participants,
            average_participants: s.average_participants,
            max_participants: s.max_participants,
            participation_rate: s.participation_rate,
        }
    }
}

/// Convert a whole listing.
pub(crate) fn collect<A, B: From<A>>(items: Vec<A>) -> Vec<B> {
    items.into_iter().map(B::from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_counts_and_status_default() {
        let wire: EventResponse = serde_json::from_value(json!({
            "eventId": 3,
            "eventName": "Meetup",
            "description": ""
        }))
        .unwrap();

        let event = Event::from(wire);
        assert_eq!(event.id, EventId(3));
        assert_eq!(event.capacity, 0);
        assert_eq!(event.participant_count, 0);
        assert_eq!(event.status, EventStatus::Active);
        assert_eq!(event.description, None);
    }

    #[test]
    fn participant_keeps_event_link() {
        let wire: ParticipantResponse = serde_json::from_value(json!({
            "participationId": 12,
            "eventId": 3,
            "participantName": "Hana",
            "participantEmail": "hana@example.com",
            "participantPhone": "090-1234"
        }))
        .unwrap();

        let p = Participant::from(wire);
        assert_eq!(p.id, ParticipationId(12));
        assert_eq!(p.event_id, Some(EventId(3)));
        assert_eq!(p.phone.as_deref(), Some("090-1234"));
    }
}
