// src/utils/mod.rs
pub mod error;
pub mod logging;

pub use error::{ApiError, AppError, StorageError, ValidationError}; // Re-export error types for convenience
