//! `view <name>`: enter a top-level view by name.

use eventdesk_core::{View, ViewController};

use crate::cli::ViewArgs;
use crate::error::CliError;

use super::{Context, dashboard, stats, util};

pub async fn handle(
    controller: &mut ViewController,
    args: ViewArgs,
    ctx: &Context<'_>,
) -> Result<(), CliError> {
    match View::parse(&args.name)? {
        View::Dashboard => dashboard::handle(controller, ctx).await,
        View::Statistics => stats::handle(controller, ctx).await,
        View::Events => {
            controller.switch_view(View::Events).await?;
            util::print_events(controller, ctx, true)
        }
        // No structured output for a blank form
        View::CreateEvent => {
            controller.switch_view(View::CreateEvent).await?;
            util::print_page(controller, ctx)
        }
    }
}
