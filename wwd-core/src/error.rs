//! Error types for fetching and decoding wind-wave data

use thiserror::Error;

/// Main error type for forecast requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The request never produced a response (network, DNS, CORS, ...)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A successful response omitted a required section
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    /// Latitude or longitude outside the valid range, or not finite
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for ForecastError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ForecastError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ForecastError::Status(status.as_u16())
        } else {
            ForecastError::Transport(e.to_string())
        }
    }
}

/// Type alias for Results using ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
