//! Command handlers, one module per command group.

pub mod config_cmd;
pub mod dashboard;
pub mod events;
pub mod participants;
pub mod stats;
pub mod util;
pub mod view;

use eventdesk_core::ViewController;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Resolved per-invocation settings shared by every handler.
pub struct Context<'a> {
    pub global: &'a GlobalOpts,
    pub format: OutputFormat,
}

/// Route a service-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    controller: &mut ViewController,
    ctx: &Context<'_>,
) -> Result<(), CliError> {
    match cmd {
        Command::Dashboard => dashboard::handle(controller, ctx).await,
        Command::Stats => stats::handle(controller, ctx).await,
        Command::View(args) => view::handle(controller, args, ctx).await,
        Command::Events(args) => events::handle(controller, args, ctx).await,
        Command::Participants(args) => participants::handle(controller, args, ctx).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are handled before connecting".into(),
        )),
    }
}
