//! Crate-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Invalid record: window ends at {end} before it starts at {start}")]
    InvalidWindow { start: u64, end: u64 },

    #[error("Invalid record: {field} is negative ({value})")]
    NegativeAmount { field: &'static str, value: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StatusError>;
