// Template contexts. Fields are pre-formatted strings; the templates only
// lay them out.

use askama::Template;

#[derive(Template)]
#[template(path = "event_card.html")]
pub(super) struct EventCardTemplate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub organizer: &'a str,
    pub ratio: String,
    pub status_class: String,
    pub status_label: &'a str,
    pub description: &'a str,
    pub start: String,
    pub end: String,
    pub location: &'a str,
}

#[derive(Template)]
#[template(path = "event_list.html")]
pub(super) struct EventListTemplate {
    /// Already-rendered cards.
    pub cards: Vec<String>,
    pub empty_message: &'static str,
}

pub(super) struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "events_view.html")]
pub(super) struct EventListViewTemplate<'a> {
    pub keyword: &'a str,
    pub status_options: Vec<SelectOption>,
    pub organizer: &'a str,
    pub location: &'a str,
    pub date_from: String,
    pub date_to: String,
    pub list: String,
    /// One-based, for display.
    pub page_number: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub(super) struct DashboardTemplate {
    pub total_events: usize,
    pub active_events: usize,
    pub total_participants: u64,
    pub upcoming_events: usize,
    pub recent: String,
}

pub(super) struct ParticipantRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[derive(Template)]
#[template(path = "participants.html")]
pub(super) struct ParticipantsTemplate<'a> {
    pub rows: Vec<ParticipantRow<'a>>,
    pub empty_message: &'static str,
}

#[derive(Template)]
#[template(path = "event_details.html")]
pub(super) struct DetailsTemplate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub start: String,
    pub end: String,
    pub location: &'a str,
    pub organizer: &'a str,
    pub ratio: String,
    pub status_class: String,
    pub status_label: &'a str,
    pub participants: String,
    pub form_name: &'a str,
    pub form_email: &'a str,
    pub form_phone: &'a str,
}

#[derive(Template)]
#[template(path = "statistics.html")]
pub(super) struct StatisticsTemplate {
    pub total_events: u64,
    pub active_events: u64,
    pub completed_events: u64,
    pub cancelled_events: u64,
    pub total_participants: u64,
    pub average_participants: f64,
    pub max_participants: u64,
    pub participation_rate: f64,
}

#[derive(Template)]
#[template(path = "event_form.html")]
pub(super) struct EventFormTemplate<'a> {
    pub title: &'static str,
    pub name: &'a str,
    pub description: &'a str,
    pub start: String,
    pub end: String,
    pub location: &'a str,
    pub organizer: &'a str,
    pub capacity: String,
}

pub(super) struct NavItem {
    pub name: String,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
pub(super) struct PageTemplate {
    pub nav: Vec<NavItem>,
    pub view_name: String,
    pub body: String,
    /// Rendered detail panel, empty when closed.
    pub modal: String,
}
