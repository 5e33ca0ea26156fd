// ── Render layer ──
//
// Pure functions from model values to HTML fragments. No network, no
// mutation. Every interpolated value goes through askama's HTML escaper;
// nested fragments are inserted with `|safe` only after they were
// rendered (and escaped) by their own template.

mod templates;

use askama::Template;
use chrono::{NaiveDate, NaiveDateTime};
use strum::IntoEnumIterator;

use crate::error::CoreError;
use crate::messages;
use crate::model::{Event, EventStatus, Participant, Statistics};
use crate::state::{AppState, DashboardSummary, DetailPanel, EventForm, ParticipantForm};
use crate::view::View;

use self::templates::{
    DashboardTemplate, DetailsTemplate, EventCardTemplate, EventFormTemplate, EventListTemplate,
    EventListViewTemplate, NavItem, PageTemplate, ParticipantRow, ParticipantsTemplate,
    SelectOption, StatisticsTemplate,
};

const DISPLAY_FORMAT: &str = "%Y/%-m/%-d %H:%M";
const DISPLAY_FORMAT_FULL: &str = "%Y/%-m/%-d %-H:%M:%S";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const MISSING: &str = "-";

// ── Helpers ────────────────────────────────────────────────────────

/// Escape text for insertion into HTML.
pub fn escape_html(text: &str) -> String {
    askama_escape::escape(text, askama_escape::Html).to_string()
}

/// Display label for a status code. Unknown codes pass through unchanged.
pub fn status_text(code: &str) -> &str {
    match code {
        "ACTIVE" => "アクティブ",
        "COMPLETED" => "完了",
        "CANCELLED" => "キャンセル",
        other => other,
    }
}

/// Card-style date: `2024/6/15 10:30`.
pub fn format_display(at: Option<NaiveDateTime>) -> String {
    at.map_or_else(|| MISSING.into(), |t| t.format(DISPLAY_FORMAT).to_string())
}

/// Detail-style date with seconds: `2024/6/15 10:30:00`.
pub fn format_display_full(at: Option<NaiveDateTime>) -> String {
    at.map_or_else(
        || MISSING.into(),
        |t| t.format(DISPLAY_FORMAT_FULL).to_string(),
    )
}

/// Value for a `datetime-local` input: `2024-06-15T10:30`.
pub fn format_datetime_local(at: Option<NaiveDateTime>) -> String {
    at.map(|t| t.format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a `datetime-local` value, with or without seconds. A space is
/// accepted in place of the `T`.
pub fn parse_datetime_local(raw: &str) -> Result<NaiveDateTime, CoreError> {
    let raw = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            CoreError::validation("dateTime", format!("expected YYYY-MM-DDTHH:MM, got {raw:?}"))
        })
}

fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn status_class(status: &EventStatus) -> String {
    status.code().to_lowercase()
}

// ── Fragments ──────────────────────────────────────────────────────

/// One event card with its detail/edit/delete actions.
pub fn event_card(event: &Event) -> Result<String, CoreError> {
    let card = EventCardTemplate {
        id: event.id.0,
        name: &event.name,
        organizer: &event.organizer,
        ratio: format!("{}/{}", event.participant_count, event.capacity),
        status_class: status_class(&event.status),
        status_label: status_text(event.status.code()),
        description: event.description.as_deref().unwrap_or_default(),
        start: format_display(event.start),
        end: format_display(event.end),
        location: &event.location,
    };
    Ok(card.render()?)
}

/// One card per event, or the empty-state message.
pub fn event_list(events: &[Event]) -> Result<String, CoreError> {
    let cards = events
        .iter()
        .map(event_card)
        .collect::<Result<Vec<_>, _>>()?;
    let list = EventListTemplate {
        cards,
        empty_message: messages::NO_EVENTS,
    };
    Ok(list.render()?)
}

pub fn dashboard(summary: &DashboardSummary) -> Result<String, CoreError> {
    let template = DashboardTemplate {
        total_events: summary.total_events,
        active_events: summary.active_events,
        total_participants: summary.total_participants,
        upcoming_events: summary.upcoming_events,
        recent: event_list(&summary.recent)?,
    };
    Ok(template.render()?)
}

/// The participant roster, or the empty-roster message.
pub fn participants(participants: &[Participant]) -> Result<String, CoreError> {
    let rows = participants
        .iter()
        .map(|p| ParticipantRow {
            id: p.id.0,
            name: &p.name,
            email: &p.email,
            phone: p.phone.as_deref().unwrap_or_default(),
        })
        .collect();
    let template = ParticipantsTemplate {
        rows,
        empty_message: messages::NO_PARTICIPANTS,
    };
    Ok(template.render()?)
}

/// The detail panel: event facts, roster and registration form.
pub fn event_details(panel: &DetailPanel, form: &ParticipantForm) -> Result<String, CoreError> {
    let event = &panel.event;
    let template = DetailsTemplate {
        id: event.id.0,
        title: &event.name,
        description: event.description.as_deref().unwrap_or_default(),
        start: format_display_full(event.start),
        end: format_display_full(event.end),
        location: &event.location,
        organizer: &event.organizer,
        ratio: format!("{} / {}", event.participant_count, event.capacity),
        status_class: status_class(&event.status),
        status_label: status_text(event.status.code()),
        participants: participants(&panel.participants)?,
        form_name: &form.name,
        form_email: &form.email,
        form_phone: &form.phone,
    };
    Ok(template.render()?)
}

/// Aggregate counts; anything missing shows as 0.
pub fn statistics(stats: &Statistics) -> Result<String, CoreError> {
    let template = StatisticsTemplate {
        total_events: stats.total_events.unwrap_or(0),
        active_events: stats.active_events.unwrap_or(0),
        completed_events: stats.completed_events.unwrap_or(0),
        cancelled_events: stats.cancelled_events.unwrap_or(0),
        total_participants: stats.total_participants.unwrap_or(0),
        average_participants: stats.average_participants.unwrap_or(0.0),
        max_participants: stats.max_participants.unwrap_or(0),
        participation_rate: stats.participation_rate.unwrap_or(0.0),
    };
    Ok(template.render()?)
}

/// The create/edit form. `editing` picks the title.
pub fn event_form(form: &EventForm, editing: bool) -> Result<String, CoreError> {
    let template = EventFormTemplate {
        title: if editing {
            messages::FORM_TITLE_EDIT
        } else {
            messages::FORM_TITLE_CREATE
        },
        name: &form.name,
        description: &form.description,
        start: format_datetime_local(form.start),
        end: format_datetime_local(form.end),
        location: &form.location,
        organizer: &form.organizer,
        capacity: (form.capacity > 0).then(|| form.capacity.to_string()).unwrap_or_default(),
    };
    Ok(template.render()?)
}

/// The event list view: filters, list and pagination.
fn events_view(state: &AppState) -> Result<String, CoreError> {
    let filter = &state.filter;
    let selected_status = filter.status.as_deref().unwrap_or_default();
    let status_options = std::iter::once(("", "すべて"))
        .chain(
            [EventStatus::Active, EventStatus::Completed, EventStatus::Cancelled]
                .iter()
                .map(|s| (s.code(), status_text(s.code()))),
        )
        .map(|(value, label)| SelectOption {
            value: value.to_owned(),
            label: label.to_owned(),
            selected: value == selected_status,
        })
        .collect();

    let has_next = state
        .last_page
        .as_ref()
        .and_then(|p| p.has_next)
        .unwrap_or(true);
    let template = EventListViewTemplate {
        keyword: filter.keyword.as_deref().unwrap_or_default(),
        status_options,
        organizer: filter.organizer.as_deref().unwrap_or_default(),
        location: filter.location.as_deref().unwrap_or_default(),
        date_from: format_date_input(filter.date_from),
        date_to: format_date_input(filter.date_to),
        list: event_list(&state.events)?,
        page_number: state.page + 1,
        has_previous: state.page > 0,
        has_next,
    };
    Ok(template.render()?)
}

/// The body of the current view.
pub fn view(state: &AppState, now: NaiveDateTime) -> Result<String, CoreError> {
    match state.view {
        View::Dashboard => dashboard(&DashboardSummary::compute(
            &state.events,
            &state.statistics,
            now,
        )),
        View::Events => events_view(state),
        View::CreateEvent => event_form(&state.form, state.is_editing()),
        View::Statistics => statistics(&state.statistics),
    }
}

/// The full page: navigation with the active marker, the current view,
/// and the detail panel when open.
pub fn page(state: &AppState, now: NaiveDateTime) -> Result<String, CoreError> {
    let nav = View::iter()
        .map(|v| NavItem {
            name: v.to_string(),
            label: v.label(),
            active: v == state.view,
        })
        .collect();
    let modal = match &state.details {
        Some(panel) => event_details(panel, &state.participant_form)?,
        None => String::new(),
    };
    let template = PageTemplate {
        nav,
        view_name: state.view.to_string(),
        body: view(state, now)?,
        modal,
    };
    Ok(template.render()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{EventId, ParticipationId};

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn event(id: i64, name: &str) -> Event {
        Event {
            id: EventId(id),
            name: name.into(),
            description: Some("desc".into()),
            start: Some(at("2024-06-15T10:30:00")),
            end: Some(at("2024-06-15T12:05:00")),
            location: "Hall A".into(),
            organizer: "Org".into(),
            capacity: 10,
            participant_count: 2,
            status: EventStatus::Active,
            created_at: None,
            updated_at: None,
        }
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"event-card\"").count()
    }

    #[test]
    fn one_card_per_event() {
        let events: Vec<Event> = (1..=3).map(|i| event(i, "Meetup")).collect();
        let html = event_list(&events).unwrap();
        assert_eq!(card_count(&html), 3);
        assert!(!html.contains(messages::NO_EVENTS));
    }

    #[test]
    fn empty_list_shows_message_and_no_cards() {
        let html = event_list(&[]).unwrap();
        assert_eq!(card_count(&html), 0);
        assert!(html.contains(messages::NO_EVENTS));
    }

    #[test]
    fn user_text_is_escaped() {
        assert!(!escape_html("<script>alert(1)</script>").contains("<script"));

        let html = event_card(&event(1, "<script>alert(1)</script>")).unwrap();
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_text("ACTIVE"), "アクティブ");
        assert_eq!(status_text("COMPLETED"), "完了");
        assert_eq!(status_text("CANCELLED"), "キャンセル");
        assert_eq!(status_text("POSTPONED"), "POSTPONED");
    }

    #[test]
    fn card_shows_ratio_and_dates() {
        let html = event_card(&event(7, "Meetup")).unwrap();
        assert!(html.contains("2/10"));
        assert!(html.contains("2024/6/15 10:30"));
        assert!(html.contains("2024/6/15 12:05"));
        assert!(html.contains("status-active"));
    }

    #[test]
    fn datetime_local_round_trip() {
        let t = at("2024-06-15T10:30:00");
        assert_eq!(format_datetime_local(Some(t)), "2024-06-15T10:30");
        assert_eq!(parse_datetime_local("2024-06-15T10:30").unwrap(), t);
        assert_eq!(parse_datetime_local("2024-06-15 10:30:00").unwrap(), t);
        assert!(parse_datetime_local("15/06/2024").is_err());
        assert_eq!(format_datetime_local(None), "");
        assert_eq!(format_display_full(Some(at("2024-06-15T09:05:00"))), "2024/6/15 9:05:00");
    }

    #[test]
    fn empty_roster_message() {
        let html = participants(&[]).unwrap();
        assert!(html.contains(messages::NO_PARTICIPANTS));

        let roster = vec![Participant {
            id: ParticipationId(4),
            event_id: Some(EventId(1)),
            name: "Hana".into(),
            email: "hana@example.com".into(),
            phone: None,
            registered_at: None,
        }];
        let html = participants(&roster).unwrap();
        assert!(html.contains("hana@example.com"));
        assert!(!html.contains(messages::NO_PARTICIPANTS));
        assert!(!html.contains("participant-phone"));
    }

    #[test]
    fn statistics_default_to_zero() {
        let html = statistics(&Statistics {
            average_participants: Some(3.5),
            ..Statistics::default()
        })
        .unwrap();
        assert!(html.contains(">3.5<"));
        assert!(html.contains(">0%<"));
    }

    #[test]
    fn page_marks_active_view() {
        let mut state = AppState::default();
        state.view = View::Statistics;
        let html = page(&state, at("2024-01-01T00:00:00")).unwrap();
        assert!(html.contains("class=\"nav-btn active\" data-view=\"statistics\""));
        assert!(html.contains("id=\"statistics-view\""));
        assert!(!html.contains("event-modal"));
    }

    #[test]
    fn form_title_follows_mode() {
        let form = EventForm::default();
        assert!(event_form(&form, false).unwrap().contains(messages::FORM_TITLE_CREATE));
        assert!(event_form(&form, true).unwrap().contains(messages::FORM_TITLE_EDIT));
    }
}
