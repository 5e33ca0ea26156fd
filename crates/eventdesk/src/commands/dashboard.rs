//! Dashboard command handler.

use std::fmt::Write;

use chrono::Local;

use eventdesk_core::{DashboardSummary, View, ViewController, render};

use crate::error::CliError;
use crate::output;

use super::Context;

fn detail(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total events:       {}", summary.total_events);
    let _ = writeln!(out, "Active events:      {}", summary.active_events);
    let _ = writeln!(out, "Upcoming events:    {}", summary.upcoming_events);
    let _ = writeln!(out, "Total participants: {}", summary.total_participants);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recent:");
    if summary.recent.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for event in &summary.recent {
        let _ = writeln!(
            out,
            "  #{} {} ({})",
            event.id,
            event.name,
            render::format_display(event.start)
        );
    }
    out.trim_end().to_owned()
}

pub async fn handle(controller: &mut ViewController, ctx: &Context<'_>) -> Result<(), CliError> {
    controller.switch_view(View::Dashboard).await?;

    let state = controller.state();
    let summary =
        DashboardSummary::compute(&state.events, &state.statistics, Local::now().naive_local());
    let out = output::render_single(ctx.format, &summary, detail, || Ok(controller.render()?))?;
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}
