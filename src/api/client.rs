// src/api/client.rs
use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::models::{ErrorBody, Report, ReportRequest, SearchKind, SearchRequest, SearchResponse};
use crate::config::ClientConfig;
use crate::utils::error::ApiError;

pub const SEARCH_PATH: &str = "/api/opportunities/search";
pub const GENERATE_REPORT_PATH: &str = "/api/opportunities/generate-report";

/// The two backend calls the dashboard depends on.
///
/// Each call runs once per user action: no retries, no timeout, no cancellation.
#[async_trait]
pub trait OpportunityApi: Send + Sync {
    /// Searches companies or individuals. `query` is sent exactly as typed.
    async fn search(&self, query: &str, kind: SearchKind) -> Result<SearchResponse, ApiError>;

    /// Requests an AI narrative for a person at a company.
    async fn generate_report(&self, person_name: &str, company_name: &str) -> Result<Report, ApiError>;
}

/// reqwest-backed implementation talking to the real backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            // No timeout on purpose: the transport's own limits are the only bound
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POSTs a JSON body and decodes either the success payload or the error envelope.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Could not reach {}: {}", url, e);
                ApiError::Unreachable(e)
            })?;

        let status = response.status();
        let text = response.text().await?; // Body read failures count as transport failures
        tracing::debug!("Received {} bytes with status {} from {}", text.len(), status, url);

        if !status.is_success() {
            tracing::warn!("HTTP error status: {} for URL: {}", status, url);
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            return Err(match message {
                Some(message) => ApiError::Server { status, message },
                None => ApiError::Http(status),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Failed to decode response from {}: {}", url, e);
            ApiError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl OpportunityApi for HttpApiClient {
    async fn search(&self, query: &str, kind: SearchKind) -> Result<SearchResponse, ApiError> {
        tracing::info!("Searching {} for {:?}", kind, query);
        let body = SearchRequest { query, search_type: kind };
        let response: SearchResponse = self.post_json(SEARCH_PATH, &body).await?;
        tracing::info!(
            "Search returned {} companies, {} individuals",
            response.companies.as_ref().map_or(0, Vec::len),
            response.individuals.as_ref().map_or(0, Vec::len)
        );
        Ok(response)
    }

    async fn generate_report(&self, person_name: &str, company_name: &str) -> Result<Report, ApiError> {
        tracing::info!("Generating report for {} ({})", person_name, company_name);
        let body = ReportRequest { person_name, company_name };
        let report: Report = self.post_json(GENERATE_REPORT_PATH, &body).await?;
        tracing::info!("Report generated at {} ({} chars)", report.report_generated, report.llm_response.len());
        Ok(report)
    }
}
