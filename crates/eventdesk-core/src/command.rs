// ── Command API ──
//
// Every user action can be expressed as a `Command` and routed through
// `ViewController::dispatch`, so front-ends only need one entry point.

use crate::model::{EventId, ParticipationId};
use crate::search::SearchFilter;
use crate::state::{EventForm, ParticipantForm};
use crate::view::View;

/// Direction for [`Command::ChangePage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// All user actions the controller understands.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Navigation ───────────────────────────────────────────────────
    SwitchView(View),
    ShowCreateForm,
    CancelForm,

    // ── Event list ───────────────────────────────────────────────────
    SetFilter(SearchFilter),
    Search,
    ClearFilters,
    ChangePage(PageDirection),

    // ── Events ───────────────────────────────────────────────────────
    ShowEventDetails(EventId),
    CloseDetails,
    EditEvent(EventId),
    SaveEvent(EventForm),
    DeleteEvent(EventId),

    // ── Participants ─────────────────────────────────────────────────
    RegisterParticipant(ParticipantForm),
    RemoveParticipant(ParticipationId),

    // ── Statistics ───────────────────────────────────────────────────
    LoadStatistics,
}

/// Result of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user declined a confirmation prompt; nothing was sent.
    Declined,
}
