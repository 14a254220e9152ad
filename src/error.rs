//! Error types for the hoopstat CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoopError>;

#[derive(Error, Debug)]
pub enum HoopError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data unavailable: primary source '{primary}' and fallback '{fallback}' both failed")]
    DataUnavailable { primary: String, fallback: String },

    #[error("Invalid shot result: {value}")]
    InvalidShotResult { value: String },

    #[error("Invalid shot zone: {value}")]
    InvalidShotZone { value: String },
}
