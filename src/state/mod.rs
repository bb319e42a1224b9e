// src/state/mod.rs
pub mod expansion;
pub mod report;
pub mod search;

pub use expansion::ExpansionController;
pub use report::{ReportController, ReportTicket};
pub use search::{Key, SearchLane};

/// Lifecycle of an asynchronous lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaneStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Issued when a search starts; the response is only applied if its ticket is still the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    /// Query exactly as typed; trimming is only used for the emptiness check
    pub query: String,
}

/// Outcome of handing a response back to its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}
