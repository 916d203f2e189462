#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Status code the identity API uses for rejected credentials.
pub const UNAUTHORIZED: u16 = 401;

/// Status code the identity API uses for duplicate accounts.
pub const CONFLICT: u16 = 409;

/// Failure of a single backend request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with an error payload.
    #[error("{message}")]
    Service {
        /// HTTP status of the response.
        code: u16,
        /// Message from the service's error body.
        message: String,
    },
    /// The request never produced an HTTP response.
    #[error("connection failed: {0}")]
    Network(String),
    /// The response arrived but its body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for service-reported errors, `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { code, .. } => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// True for failures that point at connectivity or endpoint
    /// misconfiguration rather than a rejected operation.
    ///
    /// Service-reported messages are also sniffed for transport vocabulary,
    /// since proxies in front of the backend report connection problems as
    /// ordinary error payloads.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Network(_) | Self::Decode(_) => true,
            Self::Service { message, .. } => {
                let message = message.to_lowercase();
                message.contains("network") || message.contains("fetch")
            }
        }
    }
}
