// src/transform/catalog.rs
//! Fixed talking-point text attached to every search result.
//! None of this is computed per record.

pub const COMPANY_TITLE: &str = "Company";
pub const DEFAULT_PERSON_TITLE: &str = "Business Executive";

pub const UNKNOWN: &str = "Unknown";
pub const CONFIDENTIAL: &str = "Confidential";
pub const VARIOUS: &str = "Various";
pub const NO_LINK: &str = "#";

pub const COMPANY_FINANCIAL_OPPORTUNITIES: [&str; 3] = [
    "Executive compensation and deferred compensation planning",
    "Corporate retirement plan design and review",
    "Business succession and key-person insurance planning",
];

pub const COMPANY_CONVERSATION_STARTERS: [&str; 3] = [
    "How is the company positioning itself against recent industry shifts?",
    "What are leadership's priorities for capital allocation this year?",
    "How are you supporting employee retention and benefits?",
];

pub const COMPANY_PLANNING_NEEDS: [&str; 3] = [
    "Cash management and treasury optimization",
    "Employee benefits and retirement plan administration",
    "Risk management and liability coverage",
];

pub const PERSON_FINANCIAL_OPPORTUNITIES: [&str; 3] = [
    "Wealth management and investment portfolio diversification",
    "Estate planning and wealth transfer strategies",
    "Tax optimization for equity compensation",
];

pub const PERSON_CONVERSATION_STARTERS: [&str; 3] = [
    "What are your long-term goals outside of your current role?",
    "How are you thinking about concentrated stock positions?",
    "Are there philanthropic causes you would like to support?",
];

pub const PERSON_PLANNING_NEEDS: [&str; 3] = [
    "Comprehensive financial and retirement planning",
    "Charitable giving and foundation structuring",
    "Family trust and legacy planning",
];

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
