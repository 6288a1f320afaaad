use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during a recipe search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Failed to reach search service: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Search service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not a list of recipe matches
    #[error("Failed to parse search results: {0}")]
    Parse(#[from] serde_json::Error),

    /// Client configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A results view failed to write its output
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),
}
