//! Maps error types

use thiserror::Error;

/// Errors that can occur during maps operations
#[derive(Debug, Error)]
pub enum MapsError {
    /// Connection to the maps service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the maps service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the maps service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API key is missing or was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Geocoding returned no match
    #[error("No results for: {0}")]
    NoResults(String),

    /// No route between origin and destination
    #[error("No route found from {from} to {to}")]
    NoRoute {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl MapsError {
    /// Map a Google web-service `status` field to an error
    ///
    /// Returns `None` for `OK`.
    #[must_use]
    pub fn from_status(status: &str, message: Option<&str>, subject: &str) -> Option<Self> {
        let detail = || message.map_or_else(|| status.to_string(), ToString::to_string);
        match status {
            "OK" => None,
            "ZERO_RESULTS" | "NOT_FOUND" => Some(Self::NoResults(subject.to_string())),
            "REQUEST_DENIED" => Some(Self::AuthenticationFailed(detail())),
            "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" | "MAX_ELEMENTS_EXCEEDED" => {
                Some(Self::RateLimitExceeded {
                    retry_after_secs: None,
                })
            },
            _ => Some(Self::RequestFailed(detail())),
        }
    }
}
