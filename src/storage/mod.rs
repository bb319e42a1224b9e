// src/storage/mod.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::models::Report;
use crate::present::report_text::{render_markdown, split_report};
use crate::utils::error::StorageError;

static UNSAFE_FILE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Failed to compile UNSAFE_FILE_CHARS_RE"));

/// Paths written by [`ReportStore::save_report`].
#[derive(Debug, Clone)]
pub struct SavedReport {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

/// Writes generated reports to disk as JSON plus a readable markdown copy.
pub struct ReportStore {
    base_dir: PathBuf,
}

impl ReportStore {
    /// Creates a new ReportStore, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves `report` for the given person/company pair.
    pub fn save_report(&self, person_name: &str, company_name: &str, report: &Report) -> Result<SavedReport, StorageError> {
        let stem = file_stem(person_name, company_name);
        let json_path = self.base_dir.join(format!("{}_report.json", stem));
        let markdown_path = self.base_dir.join(format!("{}_report.md", stem));

        let document = serde_json::json!({
            "person_name": person_name,
            "company_name": company_name,
            "report": report,
            "export_timestamp": chrono::Utc::now().to_rfc3339(),
        });
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&json_path, json).map_err(StorageError::IoError)?;
        tracing::info!("Saved report to {}", json_path.display());

        fs::write(&markdown_path, render_report_markdown(person_name, company_name, report))
            .map_err(StorageError::IoError)?;
        tracing::info!("Saved markdown report to {}", markdown_path.display());

        Ok(SavedReport { json_path, markdown_path })
    }
}

fn sanitize(part: &str) -> String {
    UNSAFE_FILE_CHARS_RE
        .replace_all(part.trim(), "_")
        .trim_matches('_')
        .to_string()
}

/// `Jane Doe` + `Acme Corp.` becomes `JANE_DOE_ACME_CORP`.
pub fn file_stem(person_name: &str, company_name: &str) -> String {
    let parts: Vec<String> = [person_name, company_name]
        .iter()
        .map(|p| sanitize(p))
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        "REPORT".to_string()
    } else {
        parts.join("_").to_uppercase()
    }
}

pub fn render_report_markdown(person_name: &str, company_name: &str, report: &Report) -> String {
    let mut out = String::new();
    if company_name.trim().is_empty() {
        out.push_str(&format!("# {}\n\n", person_name));
    } else {
        out.push_str(&format!("# {} ({})\n\n", person_name, company_name));
    }
    if let Some(kind) = report.report_type.as_deref() {
        out.push_str(&format!("_{}_\n\n", kind));
    }
    out.push_str(&format!("Generated: {}\n\n", report.report_generated.to_rfc3339()));
    out.push_str(&render_markdown(&split_report(&report.llm_response)));
    if !report.data_sources.is_empty() {
        out.push_str("\n## Data Sources\n\n");
        for source in &report.data_sources {
            out.push_str(&format!("- {}\n", source));
        }
    }
    out
}
