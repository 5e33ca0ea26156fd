// ── Domain model ──
//
// Transient client-side copies of the service's entities. Nothing here
// refers back to the authoritative record; every mutation round-trips
// through the gateway.

pub mod event;
pub mod participant;
pub mod statistics;

pub use event::{Event, EventId, EventStatus};
pub use participant::{Participant, ParticipationId};
pub use statistics::Statistics;
