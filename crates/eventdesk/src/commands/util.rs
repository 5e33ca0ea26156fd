//! Shared helpers for command handlers.

use chrono::NaiveDateTime;
use tabled::Tabled;

use eventdesk_core::{Event, Participant, ViewController, render};

use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Organizer")]
    organizer: String,
    #[tabled(rename = "Participants")]
    participants: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            status: render::status_text(e.status.code()).to_owned(),
            start: render::format_display(e.start),
            end: render::format_display(e.end),
            location: e.location.clone(),
            organizer: e.organizer.clone(),
            participants: format!("{}/{}", e.participant_count, e.capacity),
        }
    }
}

#[derive(Tabled)]
pub struct ParticipantRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Registered")]
    registered: String,
}

impl From<&Participant> for ParticipantRow {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id.to_string(),
            event: p.event_id.map(|id| id.to_string()).unwrap_or_default(),
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone().unwrap_or_default(),
            registered: render::format_display(p.registered_at),
        }
    }
}

// ── Output helpers ──────────────────────────────────────────────────

/// Print the full page for the controller's current view.
pub fn print_page(controller: &ViewController, ctx: &Context<'_>) -> Result<(), CliError> {
    let out = controller.render()?;
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}

/// Print the controller's event list. HTML gets the page when
/// `full_page` is set, otherwise just the list fragment.
pub fn print_events(
    controller: &ViewController,
    ctx: &Context<'_>,
    full_page: bool,
) -> Result<(), CliError> {
    let events = &controller.state().events;
    let out = output::render_list(ctx.format, events, |e| EventRow::from(e), || {
        if full_page {
            Ok(controller.render()?)
        } else {
            Ok(render::event_list(events)?)
        }
    })?;
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}

pub fn print_participants(participants: &[Participant], ctx: &Context<'_>) -> Result<(), CliError> {
    let out = output::render_list(ctx.format, participants, |p| ParticipantRow::from(p), || {
        Ok(render::participants(participants)?)
    })?;
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}

/// Note on stderr that a confirmation was declined. Not an error.
pub fn declined(ctx: &Context<'_>) {
    if !ctx.global.quiet {
        eprintln!("Cancelled; nothing was changed");
    }
}

/// Parse a `--start`/`--end` flag value.
pub fn parse_when(field: &str, raw: &str) -> Result<NaiveDateTime, CliError> {
    render::parse_datetime_local(raw).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected YYYY-MM-DDTHH:MM, got '{raw}'"),
    })
}
