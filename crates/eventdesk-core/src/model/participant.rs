use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::event::EventId;

/// Identifier of one registration (not of the person).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipationId(pub i64);

impl fmt::Display for ParticipationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person registered against a specific event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipationId,
    pub event_id: Option<EventId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registered_at: Option<NaiveDateTime>,
}
