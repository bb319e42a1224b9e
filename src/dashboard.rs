// src/dashboard.rs
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::client::OpportunityApi;
use crate::api::models::SearchKind;
use crate::present::financials::{FinancialView, StatementTab};
use crate::state::{Completion, ExpansionController, Key, LaneStatus, ReportController, SearchLane};
use crate::transform::DisplayRecord;
use crate::utils::error::ValidationError;

/// Statements modal for one company row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialModal {
    pub row: usize,
    pub company: String,
    pub view: FinancialView,
}

/// Everything the dashboard renders from. Lives only as long as the session.
#[derive(Debug, Clone)]
pub struct UiState {
    pub company: SearchLane,
    pub person: SearchLane,
    pub expansion: ExpansionController,
    pub financials: Option<FinancialModal>,
    pub report: ReportController,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            company: SearchLane::new(SearchKind::Company),
            person: SearchLane::new(SearchKind::Person),
            expansion: ExpansionController::new(),
            financials: None,
            report: ReportController::new(),
        }
    }
}

impl UiState {
    pub fn lane(&self, kind: SearchKind) -> &SearchLane {
        match kind {
            SearchKind::Company => &self.company,
            SearchKind::Person => &self.person,
        }
    }

    pub fn lane_mut(&mut self, kind: SearchKind) -> &mut SearchLane {
        match kind {
            SearchKind::Company => &mut self.company,
            SearchKind::Person => &mut self.person,
        }
    }

    /// The expanded company row, if the index still points at a result.
    pub fn expanded_company(&self) -> Option<&DisplayRecord> {
        let results = self.company.results();
        self.expansion.expanded_within(results.len()).map(|i| &results[i])
    }
}

/// Command handlers over [`UiState`], with network I/O behind [`OpportunityApi`].
///
/// The state lock is only held between awaits, so the company search, the person
/// search and report generation can all be in flight at once.
pub struct Dashboard<A: OpportunityApi> {
    api: Arc<A>,
    state: Mutex<UiState>,
}

impl<A: OpportunityApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            api,
            state: Mutex::new(UiState::default()),
        }
    }

    pub async fn snapshot(&self) -> UiState {
        self.state.lock().await.clone()
    }

    pub async fn set_query(&self, kind: SearchKind, text: impl Into<String>) {
        self.state.lock().await.lane_mut(kind).set_query(text);
    }

    /// Runs the search for `kind` with the lane's current query.
    pub async fn submit_search(&self, kind: SearchKind) -> Result<Completion, ValidationError> {
        let ticket = self.state.lock().await.lane_mut(kind).begin_submit()?;

        let result = self.api.search(&ticket.query, kind).await;

        let mut state = self.state.lock().await;
        let completion = state.lane_mut(kind).complete(&ticket, result);
        if completion == Completion::Applied
            && kind == SearchKind::Company
            && state.company.status() == LaneStatus::Success
        {
            // Row indices refer to the old result list
            state.expansion.clear();
            state.financials = None;
        }
        Ok(completion)
    }

    /// Key press in a query field; only Enter does anything.
    pub async fn on_key(&self, kind: SearchKind, key: Key) -> Option<Result<Completion, ValidationError>> {
        match key {
            Key::Enter => Some(self.submit_search(kind).await),
            Key::Other => None,
        }
    }

    /// Expands or collapses a company row. Returns the expanded index afterwards.
    pub async fn toggle_row(&self, index: usize) -> Option<usize> {
        let mut state = self.state.lock().await;
        if index >= state.company.results().len() {
            tracing::debug!("Ignoring toggle for missing row {}", index);
            return state.expansion.expanded_within(state.company.results().len());
        }
        state.expansion.toggle(index);
        state.expansion.expanded()
    }

    /// Opens the statements modal for a company row, on the income tab.
    pub async fn open_financials(&self, index: usize) -> Option<FinancialView> {
        let mut state = self.state.lock().await;
        let record = state.company.results().get(index)?;
        let modal = FinancialModal {
            row: index,
            company: record.name.clone(),
            view: FinancialView::from_record(record, StatementTab::default()),
        };
        let view = modal.view.clone();
        state.financials = Some(modal);
        Some(view)
    }

    pub async fn select_tab(&self, tab: StatementTab) {
        if let Some(modal) = self.state.lock().await.financials.as_mut() {
            modal.view.select_tab(tab);
        }
    }

    pub async fn close_financials(&self) {
        self.state.lock().await.financials = None;
    }

    /// Generates the report for a person/company pair and stores it in the modal.
    pub async fn request_report(&self, person_name: &str, company_name: &str) -> Result<Completion, ValidationError> {
        let ticket = self.state.lock().await.report.begin(person_name, company_name)?;

        let result = self
            .api
            .generate_report(&ticket.person_name, &ticket.company_name)
            .await;

        Ok(self.state.lock().await.report.complete(&ticket, result))
    }

    /// Report for a displayed record: the record's name and company.
    pub async fn request_report_for(&self, record: &DisplayRecord) -> Result<Completion, ValidationError> {
        self.request_report(&record.name, &record.company).await
    }

    pub async fn close_report(&self) {
        self.state.lock().await.report.close();
    }
}
