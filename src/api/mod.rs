// src/api/mod.rs
pub mod client;
pub mod models;

pub use client::{HttpApiClient, OpportunityApi, GENERATE_REPORT_PATH, SEARCH_PATH};
pub use models::{
    CompanyEntry, EdgarData, FilingValue, FinancialStatements, IndividualEntry, RecentNewsItem, Report,
    SearchKind, SearchResponse,
};
