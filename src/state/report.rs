// src/state/report.rs
use crate::api::models::Report;
use crate::present::report_text::{split_report, ReportBlock};
use crate::state::{Completion, LaneStatus};
use crate::utils::error::{ApiError, ValidationError};

/// Issued by [`ReportController::begin`]; hand it back with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTicket {
    pub seq: u64,
    pub person_name: String,
    pub company_name: String,
}

/// Report modal state: one request in flight at a time, cleared on close.
#[derive(Debug, Clone, Default)]
pub struct ReportController {
    status: LaneStatus,
    report: Option<Report>,
    error: Option<String>,
    target: Option<(String, String)>,
    modal_open: bool,
    latest_seq: u64,
}

impl ReportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LaneStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LaneStatus::Loading
    }

    /// The generate button is disabled while a report is loading.
    pub fn is_submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// (person, company) the modal is showing.
    pub fn target(&self) -> Option<(&str, &str)> {
        self.target.as_ref().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Display blocks for the current report, empty when there is none.
    pub fn blocks(&self) -> Vec<ReportBlock> {
        self.report
            .as_ref()
            .map(|r| split_report(&r.llm_response))
            .unwrap_or_default()
    }

    pub fn begin(&mut self, person_name: &str, company_name: &str) -> Result<ReportTicket, ValidationError> {
        if self.is_loading() {
            tracing::debug!("Report request ignored, one is already in flight");
            return Err(ValidationError::ReportInFlight);
        }
        if person_name.trim().is_empty() {
            self.status = LaneStatus::Failure;
            self.error = Some(ValidationError::EmptyPersonName.user_message());
            return Err(ValidationError::EmptyPersonName);
        }

        self.latest_seq += 1;
        self.status = LaneStatus::Loading;
        self.report = None;
        self.error = None;
        self.modal_open = true;
        self.target = Some((person_name.to_string(), company_name.to_string()));
        Ok(ReportTicket {
            seq: self.latest_seq,
            person_name: person_name.to_string(),
            company_name: company_name.to_string(),
        })
    }

    pub fn complete(&mut self, ticket: &ReportTicket, result: Result<Report, ApiError>) -> Completion {
        if ticket.seq != self.latest_seq {
            tracing::warn!("Discarding stale report for {} (seq {})", ticket.person_name, ticket.seq);
            return Completion::Stale;
        }
        match result {
            Ok(report) => {
                tracing::info!("Report ready for {} ({} sources)", ticket.person_name, report.data_sources.len());
                self.report = Some(report);
                self.status = LaneStatus::Success;
            }
            Err(e) => {
                tracing::error!("Report for {} failed: {}", ticket.person_name, e);
                self.error = Some(e.user_message());
                self.status = LaneStatus::Failure;
            }
        }
        Completion::Applied
    }

    /// Closes the modal and forgets the report; a response still in flight is dropped.
    pub fn close(&mut self) {
        self.modal_open = false;
        self.report = None;
        self.error = None;
        self.target = None;
        self.status = LaneStatus::Idle;
        self.latest_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::parse_timestamp;

    fn report(text: &str) -> Report {
        Report {
            llm_response: text.to_string(),
            report_generated: parse_timestamp("2024-01-01T00:00:00Z").unwrap(),
            data_sources: vec!["SEC".into()],
            person_name: None,
            company_name: None,
            report_type: None,
        }
    }

    #[test]
    fn submit_is_disabled_while_loading() {
        let mut ctl = ReportController::new();
        let ticket = ctl.begin("Jane Doe", "Acme Corp").unwrap();
        assert!(!ctl.is_submit_enabled());
        assert_eq!(ctl.begin("Jane Doe", "Acme Corp"), Err(ValidationError::ReportInFlight));

        ctl.complete(&ticket, Ok(report("hello")));
        assert!(ctl.is_submit_enabled());
        assert_eq!(ctl.target(), Some(("Jane Doe", "Acme Corp")));
    }

    #[test]
    fn close_clears_report() {
        let mut ctl = ReportController::new();
        let ticket = ctl.begin("Jane Doe", "Acme Corp").unwrap();
        ctl.complete(&ticket, Ok(report("• a\nb")));
        assert_eq!(ctl.blocks().len(), 2);

        ctl.close();
        assert!(!ctl.is_open());
        assert!(ctl.report().is_none());
        assert!(ctl.blocks().is_empty());
    }

    #[test]
    fn reopening_starts_without_old_report() {
        let mut ctl = ReportController::new();
        let t1 = ctl.begin("Jane Doe", "Acme Corp").unwrap();
        ctl.complete(&t1, Ok(report("old")));
        let _t2 = ctl.begin("Tim Cook", "Apple Inc.").unwrap();
        assert!(ctl.report().is_none());
        assert!(ctl.is_open());
    }

    #[test]
    fn response_after_close_is_dropped() {
        let mut ctl = ReportController::new();
        let t = ctl.begin("Jane Doe", "Acme Corp").unwrap();
        ctl.close();
        assert_eq!(ctl.complete(&t, Ok(report("late"))), Completion::Stale);
        assert!(ctl.report().is_none());
    }

    #[test]
    fn empty_person_is_rejected() {
        let mut ctl = ReportController::new();
        assert_eq!(ctl.begin("  ", "Acme"), Err(ValidationError::EmptyPersonName));
        assert!(ctl.error().is_some());
        assert!(!ctl.is_open());
    }

    #[test]
    fn failure_keeps_modal_open_with_error() {
        let mut ctl = ReportController::new();
        let t = ctl.begin("Jane Doe", "Acme Corp").unwrap();
        ctl.complete(
            &t,
            Err(ApiError::Server {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "Report generation failed: quota".into(),
            }),
        );
        assert!(ctl.is_open());
        assert_eq!(ctl.error(), Some("Report generation failed: quota"));
        assert_eq!(ctl.status(), LaneStatus::Failure);
    }
}
