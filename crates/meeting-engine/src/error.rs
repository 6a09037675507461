//! Error types for meeting-engine operations.
//!
//! Scheduling itself never fails; errors only come from building values out of
//! untrusted input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid time range: [{start}, {end}) must satisfy 0 <= start <= end <= 1440")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
