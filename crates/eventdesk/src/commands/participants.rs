//! Participant command handlers.

use eventdesk_core::{EventId, Outcome, ParticipantForm, ParticipationId, ViewController};

use crate::cli::{ParticipantsArgs, ParticipantsCommand};
use crate::error::CliError;

use super::{Context, util};

/// Print the roster of the open detail panel.
fn print_roster(controller: &ViewController, ctx: &Context<'_>) -> Result<(), CliError> {
    let participants = controller
        .state()
        .details
        .as_ref()
        .map(|panel| panel.participants.as_slice())
        .unwrap_or_default();
    util::print_participants(participants, ctx)
}

pub async fn handle(
    controller: &mut ViewController,
    args: ParticipantsArgs,
    ctx: &Context<'_>,
) -> Result<(), CliError> {
    match args.command {
        ParticipantsCommand::List { event } => {
            controller.show_event_details(EventId(event)).await?;
            print_roster(controller, ctx)
        }

        ParticipantsCommand::Register {
            event,
            name,
            email,
            phone,
        } => {
            // Registration targets the selected event
            controller.show_event_details(EventId(event)).await?;
            controller
                .register_participant(ParticipantForm {
                    name,
                    email,
                    phone: phone.unwrap_or_default(),
                })
                .await?;
            print_roster(controller, ctx)
        }

        ParticipantsCommand::Remove {
            event,
            participation,
        } => {
            controller.show_event_details(EventId(event)).await?;
            match controller
                .remove_participant(ParticipationId(participation))
                .await?
            {
                Outcome::Declined => {
                    util::declined(ctx);
                    Ok(())
                }
                Outcome::Done => print_roster(controller, ctx),
            }
        }

        ParticipantsCommand::Lookup { email } => {
            let participants = controller.participations_by_email(&email).await?;
            util::print_participants(&participants, ctx)
        }

        ParticipantsCommand::CancelByEmail { event, email } => {
            match controller.cancel_by_email(EventId(event), &email).await? {
                Outcome::Declined => util::declined(ctx),
                Outcome::Done => {}
            }
            Ok(())
        }
    }
}
