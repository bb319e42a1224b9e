// src/api/models.rs
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which lane a search belongs to. Serialized as the backend's `search_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Company,
    Person,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Company => write!(f, "company"),
            SearchKind::Person => write!(f, "person"),
        }
    }
}

/// Body of `POST /api/opportunities/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub search_type: SearchKind,
}

/// Body of `POST /api/opportunities/generate-report`
#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest<'a> {
    pub person_name: &'a str,
    pub company_name: &'a str,
}

/// Error envelope returned by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Response of the search endpoint. Only one of the two arrays is normally filled.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub companies: Option<Vec<CompanyEntry>>,
    #[serde(default)]
    pub individuals: Option<Vec<IndividualEntry>>,
    #[serde(default)]
    pub query: Option<String>,
    /// Canonical name the backend resolved the query to (ticker or alias lookup)
    #[serde(default)]
    pub mapped_query: Option<String>,
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Informational note, e.g. when the query was too short to search
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub search_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompanyEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub estimated_revenue: Option<FilingValue>,
    #[serde(default)]
    pub employee_count: Option<FilingValue>,
    #[serde(default)]
    pub recent_news: Option<Vec<RecentNewsItem>>,
    #[serde(default)]
    pub data_sources: Option<Vec<String>>,
    #[serde(default)]
    pub edgar_data: Option<EdgarData>,
    #[serde(default)]
    pub edgar_status: Option<String>,
    #[serde(default)]
    pub linkedin_status: Option<String>,
    #[serde(default)]
    pub companyresearch_status: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecentNewsItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// SEC EDGAR block attached to a company entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EdgarData {
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub financial_statements: Option<FinancialStatements>,
}

/// The handful of filing figures the statements view knows how to place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FinancialStatements {
    #[serde(default)]
    pub revenue: Option<FilingValue>,
    #[serde(default)]
    pub net_income: Option<FilingValue>,
    #[serde(default)]
    pub total_assets: Option<FilingValue>,
    #[serde(default)]
    pub total_liabilities: Option<FilingValue>,
    #[serde(default)]
    pub debt: Option<FilingValue>,
    #[serde(default)]
    pub cash_and_equivalents: Option<FilingValue>,
    #[serde(default)]
    pub filing_date: Option<String>,
}

/// Filing figures arrive either pre-formatted ("$26.97B") or as raw numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FilingValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FilingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingValue::Text(s) => write!(f, "{}", s),
            FilingValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// Renders a number with thousands separators; integral values drop the fraction.
pub fn format_number(n: f64) -> String {
    let negative = n < 0.0;
    let cents = (n.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac > 0 {
        grouped.push_str(&format!(".{:02}", frac));
    }
    if negative && cents > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IndividualEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub estimated_net_worth: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub linkedin_note: Option<String>,
    #[serde(default)]
    pub data_sources: Option<Vec<String>>,
}

/// AI-generated narrative about a person/company pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Report {
    pub llm_response: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub report_generated: DateTime<Utc>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub report_type: Option<String>,
}

// The backend emits naive UTC timestamps ("2024-01-01T00:00:00.123456"),
// so accept both RFC 3339 and offset-less forms.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid report timestamp: {}", raw))
    })
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
