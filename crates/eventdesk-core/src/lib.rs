// eventdesk-core: Session state and view orchestration between eventdesk-api and the CLI.

pub mod command;
pub mod config;
pub mod controller;
mod convert;
pub mod error;
pub mod feedback;
mod gateway;
pub mod messages;
pub mod model;
pub mod render;
pub mod search;
pub mod state;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, Outcome, PageDirection};
pub use config::{ClientConfig, DEFAULT_BASE_URL, TlsVerification};
pub use controller::ViewController;
pub use error::CoreError;
pub use feedback::{AutoConfirm, Confirm, Feedback, Silent, Toast, ToastKind};
pub use search::SearchFilter;
pub use state::{AppState, DashboardSummary, DetailPanel, EventForm, PageInfo, ParticipantForm};
pub use view::View;

// Re-export model types at the crate root for ergonomics.
pub use model::{Event, EventId, EventStatus, Participant, ParticipationId, Statistics};
