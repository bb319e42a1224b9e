// src/present/mod.rs
pub mod financials;
pub mod report_text;
pub mod status;

// Re-export key view types for convenience
pub use financials::{FinancialView, StatementRow, StatementTab, StatementTable, NOT_AVAILABLE};
pub use report_text::{split_report, ReportBlock};
pub use status::{banners_for, classify, BannerLevel, StatusBanner};
