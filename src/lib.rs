// src/lib.rs
pub mod api;
pub mod config;
pub mod dashboard;
pub mod present;
pub mod state;
pub mod storage;
pub mod transform;
pub mod utils;

pub use api::{HttpApiClient, OpportunityApi, SearchKind};
pub use config::ClientConfig;
pub use dashboard::{Dashboard, UiState};
pub use utils::AppError;
