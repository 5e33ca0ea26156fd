//! Event command handlers.

use std::fmt::Write;

use eventdesk_core::{
    DetailPanel, EventForm, EventId, EventStatus, Outcome, SearchFilter, View, ViewController,
    render,
};

use crate::cli::{CreateEventArgs, EditEventArgs, EventsArgs, EventsCommand, SearchArgs};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Detail view ─────────────────────────────────────────────────────

fn detail(panel: &DetailPanel) -> String {
    let e = &panel.event;
    let mut out = String::new();
    let _ = writeln!(out, "ID:           {}", e.id);
    let _ = writeln!(out, "Name:         {}", e.name);
    let _ = writeln!(out, "Status:       {}", render::status_text(e.status.code()));
    let _ = writeln!(out, "Start:        {}", render::format_display_full(e.start));
    let _ = writeln!(out, "End:          {}", render::format_display_full(e.end));
    let _ = writeln!(out, "Location:     {}", e.location);
    let _ = writeln!(out, "Organizer:    {}", e.organizer);
    let _ = writeln!(out, "Participants: {}/{}", e.participant_count, e.capacity);
    if let Some(ref description) = e.description {
        let _ = writeln!(out, "\n{description}");
    }
    let _ = writeln!(out);
    if panel.participants.is_empty() {
        let _ = write!(out, "No participants");
    } else {
        for p in &panel.participants {
            let _ = writeln!(out, "  [{}] {} <{}>", p.id, p.name, p.email);
        }
    }
    out.trim_end().to_owned()
}

// ── Form assembly ───────────────────────────────────────────────────

fn create_form(args: CreateEventArgs) -> Result<EventForm, CliError> {
    Ok(EventForm {
        start: Some(util::parse_when("start", &args.start)?),
        end: Some(util::parse_when("end", &args.end)?),
        name: args.name,
        description: args.description.unwrap_or_default(),
        location: args.location,
        organizer: args.organizer,
        capacity: args.capacity,
    })
}

/// Overlay the provided flags on the current values.
fn merge_form(mut form: EventForm, fields: EditEventArgs) -> Result<EventForm, CliError> {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(ref start) = fields.start {
        form.start = Some(util::parse_when("start", start)?);
    }
    if let Some(ref end) = fields.end {
        form.end = Some(util::parse_when("end", end)?);
    }
    if let Some(location) = fields.location {
        form.location = location;
    }
    if let Some(organizer) = fields.organizer {
        form.organizer = organizer;
    }
    if let Some(capacity) = fields.capacity {
        form.capacity = capacity;
    }
    Ok(form)
}

fn search_filter(args: &SearchArgs) -> SearchFilter {
    SearchFilter {
        keyword: args.keyword.clone(),
        status: args.status.clone(),
        organizer: args.organizer.clone(),
        location: args.location.clone(),
        date_from: args.from,
        date_to: args.to,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &mut ViewController,
    args: EventsArgs,
    ctx: &Context<'_>,
) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List => {
            controller.switch_view(View::Events).await?;
            util::print_events(controller, ctx, true)
        }

        EventsCommand::Search(search) => {
            controller.set_filter(search_filter(&search));
            controller.set_page(search.page);
            controller.search_events().await?;
            util::print_events(controller, ctx, false)
        }

        EventsCommand::Show { id } => {
            controller.show_event_details(EventId(id)).await?;
            let state = controller.state();
            let panel = state.details.as_ref().ok_or_else(|| CliError::NotFound {
                message: format!("event {id}"),
            })?;
            let out = output::render_single(ctx.format, panel, detail, || {
                Ok(render::event_details(panel, &state.participant_form)?)
            })?;
            output::print_output(&out, ctx.global.quiet);
            Ok(())
        }

        EventsCommand::Create(create) => {
            let form = create_form(create)?;
            controller.show_create_form();
            controller.save_event(form).await?;
            util::print_events(controller, ctx, true)
        }

        EventsCommand::Edit { id, fields } => {
            controller.edit_event(EventId(id)).await?;
            let form = merge_form(controller.state().form.clone(), fields)?;
            controller.save_event(form).await?;
            util::print_events(controller, ctx, true)
        }

        EventsCommand::Delete { id } => match controller.delete_event(EventId(id)).await? {
            Outcome::Declined => {
                util::declined(ctx);
                Ok(())
            }
            Outcome::Done => util::print_events(controller, ctx, false),
        },

        EventsCommand::ByStatus { status } => {
            let status = EventStatus::from(status.trim().to_uppercase());
            controller.events_by_status(&status).await?;
            util::print_events(controller, ctx, false)
        }

        EventsCommand::ByOrganizer { organizer } => {
            controller.events_by_organizer(&organizer).await?;
            util::print_events(controller, ctx, false)
        }

        EventsCommand::NewForm => {
            controller.show_create_form();
            util::print_page(controller, ctx)
        }
    }
}
