// src/state/search.rs
use crate::api::models::{SearchKind, SearchResponse};
use crate::state::{Completion, LaneStatus, RequestTicket};
use crate::transform::{transform_response, DisplayRecord};
use crate::utils::error::{ApiError, ValidationError};

/// Keys the query field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// State of one search lane (company or person).
///
/// Transitions: `Idle -> Loading -> Success | Failure`, and back to `Loading` on the
/// next submit. Results from a previous success stay visible while a new request runs.
#[derive(Debug, Clone)]
pub struct SearchLane {
    kind: SearchKind,
    query: String,
    status: LaneStatus,
    results: Vec<DisplayRecord>,
    error: Option<String>,
    message: Option<String>,
    mapped_query: Option<String>,
    latest_seq: u64,
}

impl SearchLane {
    pub fn new(kind: SearchKind) -> Self {
        Self {
            kind,
            query: String::new(),
            status: LaneStatus::Idle,
            results: Vec::new(),
            error: None,
            message: None,
            mapped_query: None,
            latest_seq: 0,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> LaneStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LaneStatus::Loading
    }

    pub fn results(&self) -> &[DisplayRecord] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Informational note from the backend, e.g. "Query too short or no company match found".
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Canonical name the backend searched for, when it differs from the typed query.
    pub fn mapped_query(&self) -> Option<&str> {
        self.mapped_query.as_deref()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Starts a submit. Whitespace-only queries fail locally and produce no ticket.
    pub fn begin_submit(&mut self) -> Result<RequestTicket, ValidationError> {
        if self.query.trim().is_empty() {
            tracing::debug!("Rejected empty {} search", self.kind);
            self.status = LaneStatus::Failure;
            self.error = Some(ValidationError::EmptyQuery.user_message());
            return Err(ValidationError::EmptyQuery);
        }

        self.latest_seq += 1;
        self.status = LaneStatus::Loading;
        self.error = None;
        Ok(RequestTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        })
    }

    /// Enter in the query field behaves exactly like the search button.
    pub fn on_key(&mut self, key: Key) -> Option<Result<RequestTicket, ValidationError>> {
        match key {
            Key::Enter => Some(self.begin_submit()),
            Key::Other => None,
        }
    }

    /// Applies a finished request, unless a newer submit has superseded it.
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        result: Result<SearchResponse, ApiError>,
    ) -> Completion {
        if ticket.seq != self.latest_seq {
            tracing::warn!(
                "Discarding stale {} search response (seq {} < {})",
                self.kind,
                ticket.seq,
                self.latest_seq
            );
            return Completion::Stale;
        }

        match result {
            Ok(response) => {
                self.results = transform_response(&response, self.kind);
                self.message = response.message.filter(|m| !m.is_empty());
                self.mapped_query = response.mapped_query.filter(|m| !m.is_empty());
                self.status = LaneStatus::Success;
                self.error = None;
                tracing::info!("{} search for {:?} produced {} results", self.kind, ticket.query, self.results.len());
            }
            Err(e) => {
                tracing::error!("{} search for {:?} failed: {}", self.kind, ticket.query, e);
                self.status = LaneStatus::Failure;
                self.error = Some(e.user_message());
            }
        }
        Completion::Applied
    }

    /// Back to idle; clears everything except the typed query.
    pub fn reset(&mut self) {
        self.status = LaneStatus::Idle;
        self.results.clear();
        self.error = None;
        self.message = None;
        self.mapped_query = None;
        self.latest_seq += 1; // Anything still in flight is now stale
    }
}
