use serde::{Deserialize, Serialize};

/// Aggregate counts, recomputed by the server on every fetch.
///
/// Fields the server omits stay `None`; the render layer shows them as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_events: Option<u64>,
    pub active_events: Option<u64>,
    pub completed_events: Option<u64>,
    pub cancelled_events: Option<u64>,
    pub total_participants: Option<u64>,
    pub average_participants: Option<f64>,
    pub max_participants: Option<u64>,
    pub participation_rate: Option<f64>,
}
