//! Error types for SSCD provider operations.

use thiserror::Error;

/// Errors raised by a signing capability provider.
///
/// The bridge never recovers from these locally; they travel unchanged to
/// whichever layer renders them for the application.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The signing SDK has not been initialised in this process.
    #[error("SSCD provider not initialized")]
    NotInitialized,

    /// The provider cannot be reached.
    #[error("SSCD provider unavailable: {reason}")]
    Unavailable {
        /// Reason the provider is unavailable.
        reason: String,
    },

    /// The enumeration call itself failed.
    #[error("SSCD enumeration failed: {reason}")]
    EnumerationFailed {
        /// Reason for the failure.
        reason: String,
    },

    /// Platform-specific error.
    #[error("Platform error: {message}")]
    PlatformError {
        /// Error message from the platform.
        message: String,
    },

    /// The provider returned data that could not be decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ProviderError {
    /// Create an enumeration error from a reason.
    #[must_use]
    pub fn enumeration(reason: impl Into<String>) -> Self {
        Self::EnumerationFailed {
            reason: reason.into(),
        }
    }

    /// Create an unavailable error from a reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a platform error from a message.
    #[must_use]
    pub fn platform(message: impl Into<String>) -> Self {
        Self::PlatformError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
