// src/present/status.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::transform::DisplayRecord;

// Status text containing any of these is styled as an error, anything else as a warning
static FAILURE_KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)error|failed|not\s+found|forbidden").expect("Failed to compile FAILURE_KEYWORDS_RE")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Warning,
    Error,
}

/// Inline notice for one data source that did not fully answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub source: &'static str,
    pub message: String,
    pub level: BannerLevel,
}

pub fn classify(status: &str) -> BannerLevel {
    if FAILURE_KEYWORDS_RE.is_match(status) {
        BannerLevel::Error
    } else {
        BannerLevel::Warning
    }
}

/// Banners for a company row: EDGAR, LinkedIn, then company research.
pub fn banners_for(record: &DisplayRecord) -> Vec<StatusBanner> {
    [
        ("SEC EDGAR", &record.edgar_status),
        ("LinkedIn", &record.linkedin_status),
        ("Company Research", &record.company_research_status),
    ]
    .into_iter()
    .filter_map(|(source, status)| {
        let message = status.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }
        Some(StatusBanner {
            source,
            message: message.to_string(),
            level: classify(message),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::CompanyEntry;
    use crate::transform::transform_company;

    #[test]
    fn failure_keywords_are_errors() {
        assert_eq!(classify("EDGAR API Error: 503"), BannerLevel::Error);
        assert_eq!(classify("Request failed"), BannerLevel::Error);
        assert_eq!(classify("Company not found in EDGAR"), BannerLevel::Error);
        assert_eq!(classify("403 FORBIDDEN"), BannerLevel::Error);
    }

    #[test]
    fn other_text_is_warning() {
        assert_eq!(classify("Rate limited, showing cached data"), BannerLevel::Warning);
        assert_eq!(classify("LinkedIn data limited"), BannerLevel::Warning);
    }

    #[test]
    fn banners_in_source_order_skipping_empty() {
        let rec = transform_company(&CompanyEntry {
            name: Some("Acme".into()),
            edgar_status: Some("Company not found".into()),
            linkedin_status: Some("  ".into()),
            companyresearch_status: Some("Partial data only".into()),
            ..Default::default()
        });
        let banners = banners_for(&rec);
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].source, "SEC EDGAR");
        assert_eq!(banners[0].level, BannerLevel::Error);
        assert_eq!(banners[1].source, "Company Research");
        assert_eq!(banners[1].level, BannerLevel::Warning);
    }
}
