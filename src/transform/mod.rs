// src/transform/mod.rs
pub mod catalog;

use serde::Serialize;

use crate::api::models::{CompanyEntry, EdgarData, IndividualEntry, RecentNewsItem, SearchKind, SearchResponse};
use catalog::*;

/// Whether a record came from the company or the individual list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Company,
    Person,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub industry: String,
    pub revenue: String,
    pub employees: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub date: String,
    pub source: String,
}

/// One search result, normalized so the views never care which list it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub estimated_net_worth: String,
    pub linkedin_url: String,
    pub company_info: CompanyInfo,
    pub financial_opportunities: Vec<String>,
    pub conversation_starters: Vec<String>,
    pub planning_needs: Vec<String>,
    pub recent_news: Vec<NewsItem>,
    pub data_sources: Vec<String>,
    pub edgar_data: Option<EdgarData>,
    pub edgar_status: Option<String>,
    pub linkedin_status: Option<String>,
    pub company_research_status: Option<String>,
    pub ceo_name: Option<String>,
    pub ticker: Option<String>,
}

impl DisplayRecord {
    /// Company rows are recognized by their fixed title.
    pub fn is_company(&self) -> bool {
        self.title == COMPANY_TITLE
    }

    pub fn kind(&self) -> RecordKind {
        if self.is_company() {
            RecordKind::Company
        } else {
            RecordKind::Person
        }
    }
}

fn or_default(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn unknown_info() -> CompanyInfo {
    CompanyInfo {
        industry: UNKNOWN.to_string(),
        revenue: UNKNOWN.to_string(),
        employees: UNKNOWN.to_string(),
    }
}

fn news_item(item: &RecentNewsItem) -> NewsItem {
    NewsItem {
        title: or_default(&item.title, UNKNOWN),
        date: or_default(&item.date, UNKNOWN),
        source: or_default(&item.source, UNKNOWN),
    }
}

pub fn transform_company(entry: &CompanyEntry) -> DisplayRecord {
    let name = or_default(&entry.name, UNKNOWN);
    DisplayRecord {
        company: name.clone(),
        name,
        title: COMPANY_TITLE.to_string(),
        estimated_net_worth: CONFIDENTIAL.to_string(),
        linkedin_url: or_default(&entry.linkedin_url, NO_LINK),
        company_info: CompanyInfo {
            industry: or_default(&entry.industry, UNKNOWN),
            revenue: entry
                .estimated_revenue
                .as_ref()
                .map_or_else(|| UNKNOWN.to_string(), |v| v.to_string()),
            employees: entry
                .employee_count
                .as_ref()
                .map_or_else(|| UNKNOWN.to_string(), |v| v.to_string()),
        },
        financial_opportunities: to_owned_list(&COMPANY_FINANCIAL_OPPORTUNITIES),
        conversation_starters: to_owned_list(&COMPANY_CONVERSATION_STARTERS),
        planning_needs: to_owned_list(&COMPANY_PLANNING_NEEDS),
        recent_news: entry
            .recent_news
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(news_item)
            .collect(),
        data_sources: entry.data_sources.clone().unwrap_or_default(),
        edgar_data: entry.edgar_data.clone(),
        edgar_status: entry.edgar_status.clone(),
        linkedin_status: entry.linkedin_status.clone(),
        company_research_status: entry.companyresearch_status.clone(),
        ceo_name: Some(or_default(&entry.ceo, UNKNOWN)),
        ticker: entry.ticker.clone(),
    }
}

// estimated_net_worth and linkedin_note on the individual are left unread;
// person rows always show the generic placeholders.
pub fn transform_individual(entry: &IndividualEntry) -> DisplayRecord {
    DisplayRecord {
        name: or_default(&entry.name, UNKNOWN),
        title: or_default(&entry.title, DEFAULT_PERSON_TITLE),
        company: or_default(&entry.company, VARIOUS),
        estimated_net_worth: CONFIDENTIAL.to_string(),
        linkedin_url: NO_LINK.to_string(),
        company_info: unknown_info(),
        financial_opportunities: to_owned_list(&PERSON_FINANCIAL_OPPORTUNITIES),
        conversation_starters: to_owned_list(&PERSON_CONVERSATION_STARTERS),
        planning_needs: to_owned_list(&PERSON_PLANNING_NEEDS),
        recent_news: Vec::new(),
        data_sources: entry.data_sources.clone().unwrap_or_default(),
        edgar_data: None,
        edgar_status: None,
        linkedin_status: None,
        company_research_status: None,
        ceo_name: None,
        ticker: None,
    }
}

pub fn transform_companies(entries: &[CompanyEntry]) -> Vec<DisplayRecord> {
    entries.iter().map(transform_company).collect()
}

pub fn transform_individuals(entries: &[IndividualEntry]) -> Vec<DisplayRecord> {
    entries.iter().map(transform_individual).collect()
}

/// Picks the list matching `kind` and normalizes it. A missing list yields no records.
pub fn transform_response(response: &SearchResponse, kind: SearchKind) -> Vec<DisplayRecord> {
    match kind {
        SearchKind::Company => transform_companies(response.companies.as_deref().unwrap_or_default()),
        SearchKind::Person => transform_individuals(response.individuals.as_deref().unwrap_or_default()),
    }
}
