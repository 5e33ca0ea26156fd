// ── Event domain types ──

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ── EventId ─────────────────────────────────────────────────────────

/// Server-assigned event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

// ── EventStatus ─────────────────────────────────────────────────────

/// Lifecycle status.
///
/// Codes the client does not know are kept verbatim in `Other`, so they
/// survive a round-trip and display unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
    Other(String),
}

impl EventStatus {
    /// The wire code (`ACTIVE`, `COMPLETED`, ...).
    pub fn code(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Other(code) => code,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<String> for EventStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ACTIVE" => Self::Active,
            "COMPLETED" => Self::Completed,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Other(code),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── Event ───────────────────────────────────────────────────────────

/// A scheduled activity with capacity and a lifecycle status.
///
/// `participant_count <= capacity` is the server's invariant; the client
/// displays whatever it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub location: String,
    pub organizer: String,
    pub capacity: u32,
    pub participant_count: u32,
    pub status: EventStatus,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Event {
    /// Active and starting strictly after `now`.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.status.is_active() && self.start.is_some_and(|start| start > now)
    }

    /// Sort key for "recent" listings: creation time, else start time.
    pub fn recency(&self) -> Option<NaiveDateTime> {
        self.created_at.or(self.start)
    }
}
