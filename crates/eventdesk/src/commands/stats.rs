//! Statistics command handler.

use std::fmt::Write;

use eventdesk_core::{Statistics, View, ViewController};

use crate::error::CliError;
use crate::output;

use super::Context;

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

fn detail(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total events:         {}", count(stats.total_events));
    let _ = writeln!(out, "Active events:        {}", count(stats.active_events));
    let _ = writeln!(out, "Completed events:     {}", count(stats.completed_events));
    let _ = writeln!(out, "Cancelled events:     {}", count(stats.cancelled_events));
    let _ = writeln!(out, "Total participants:   {}", count(stats.total_participants));
    let _ = writeln!(
        out,
        "Average participants: {:.1}",
        stats.average_participants.unwrap_or_default()
    );
    let _ = writeln!(out, "Max participants:     {}", count(stats.max_participants));
    let _ = write!(
        out,
        "Participation rate:   {:.0}%",
        stats.participation_rate.unwrap_or_default()
    );
    out
}

pub async fn handle(controller: &mut ViewController, ctx: &Context<'_>) -> Result<(), CliError> {
    controller.switch_view(View::Statistics).await?;

    let stats = &controller.state().statistics;
    let out = output::render_single(ctx.format, stats, detail, || Ok(controller.render()?))?;
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}
