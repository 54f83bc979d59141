//! Error types for the NBA stats dashboard

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid {kind} ID: {value}")]
    InvalidId { kind: &'static str, value: String },

    #[error("Invalid {name} parameter: {value}")]
    InvalidParam { name: &'static str, value: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error("Stats API returned no data")]
    NoData,

    #[error("{what} not found")]
    NotFound { what: String },
}
