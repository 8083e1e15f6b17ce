//! Assistant profile entity
//!
//! Collected interactively when a project is scaffolded and rendered into
//! the project's `user/profile.yml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Owner and service settings of a scaffolded assistant project
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantProfile {
    /// Ten-digit numeric user id
    pub user_id: u64,
    /// Full user name
    pub user_name: String,
    /// How the assistant addresses the user
    pub address_as: String,
    /// Assistant name
    pub assistant_name: String,
    /// Geocoding/routing API key
    pub maps_key: String,
    /// Forecast API key
    pub forecast_key: String,
    /// Action server port
    pub action_server_port: u16,
    /// Socket server port
    pub socket_port: u16,
}

impl AssistantProfile {
    /// Smallest ten-digit user id
    pub const MIN_USER_ID: u64 = 1_000_000_000;
    /// Largest ten-digit user id
    pub const MAX_USER_ID: u64 = 9_999_999_999;

    /// Whether every prompted field was answered
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.user_name,
            &self.address_as,
            &self.assistant_name,
            &self.maps_key,
            &self.forecast_key,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    /// Marker status to record after writing this profile
    #[must_use]
    pub fn status(&self) -> ProfileStatus {
        if self.is_complete() {
            ProfileStatus::Updated
        } else {
            ProfileStatus::Incomplete
        }
    }

    /// Validate the id range and port numbers
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(Self::MIN_USER_ID..=Self::MAX_USER_ID).contains(&self.user_id) {
            return Err(DomainError::ValidationError(format!(
                "user id {} is not a ten-digit number",
                self.user_id
            )));
        }
        if self.action_server_port == 0 || self.socket_port == 0 {
            return Err(DomainError::ValidationError(
                "ports must be non-zero".to_string(),
            ));
        }
        if self.action_server_port == self.socket_port {
            return Err(DomainError::ValidationError(format!(
                "action server and socket server both use port {}",
                self.socket_port
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for AssistantProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantProfile")
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .field("address_as", &self.address_as)
            .field("assistant_name", &self.assistant_name)
            .field("maps_key", &"[REDACTED]")
            .field("forecast_key", &"[REDACTED]")
            .field("action_server_port", &self.action_server_port)
            .field("socket_port", &self.socket_port)
            .finish()
    }
}

/// State recorded in the project's profile marker file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileStatus {
    /// Skeleton copied, profile never filled in
    Created,
    /// Profile written with every field answered
    Updated,
    /// Profile written with blank answers
    Incomplete,
    /// Profile edited outside the tool
    Modified,
}

impl ProfileStatus {
    /// Marker file text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
            Self::Incomplete => "Incomplete",
            Self::Modified => "Modified",
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Created" => Ok(Self::Created),
            "Updated" => Ok(Self::Updated),
            "Incomplete" => Ok(Self::Incomplete),
            "Modified" => Ok(Self::Modified),
            other => Err(DomainError::ValidationError(format!(
                "unknown profile status: {other}"
            ))),
        }
    }
}
