//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// API credential missing or rejected by an oracle
    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    /// The requested zone field is absent from the reverse lookup
    #[error("Zone field not found: {field}")]
    ZoneFieldNotFound { field: String },

    /// Forward geocoding returned no result
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The routing oracle returned no route
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The forecast payload lacks the requested entry or field
    #[error("Forecast data missing: {0}")]
    ForecastDataMissing(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a zone-field-not-found error
    pub fn zone_field_not_found(field: impl Into<String>) -> Self {
        Self::ZoneFieldNotFound {
            field: field.into(),
        }
    }

    /// Whether an oracle rejected the credential
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self, ApplicationError::AuthenticationFailure(_))
    }
}
