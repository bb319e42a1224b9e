// src/utils/error.rs
use thiserror::Error;

/// Fixed text shown whenever the backend cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "Cannot reach server. Please check that the backend is running.";

// Errors raised while talking to the opportunities backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network request failed: {0}")]
    Unreachable(#[from] reqwest::Error), // Connection refused, DNS, reset...

    #[error("Server error ({status}): {message}")]
    Server {
        status: reqwest::StatusCode,
        message: String, // Verbatim `error` field from the response body
    },

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // Non-2xx without a usable error body

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text the dashboard shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Http(status) => format!("Request failed with status {}", status),
            ApiError::Parse(_) => "Received an unreadable response from the server".to_string(),
        }
    }
}

// Rejected locally, before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a search term")]
    EmptyQuery,

    #[error("A person name is required to generate a report")]
    EmptyPersonName,

    #[error("A report is already being generated")]
    ReportInFlight,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API interaction failed: {0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
