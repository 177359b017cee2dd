//! Error types for bridge operations.

use musap_sscd::ProviderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced across the bridge boundary.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The signing capability provider failed. Carried unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The application layer called a method the module does not expose.
    #[error("Unknown method: {method}")]
    UnknownMethod {
        /// The requested method name.
        method: String,
    },

    /// Arguments did not match the method's signature.
    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments {
        /// The method being called.
        method: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// No enabled SSCD carries the requested identifier.
    #[error("SSCD not found: {sscd_id}")]
    SscdNotFound {
        /// The identifier that was looked up.
        sscd_id: String,
    },

    /// A value could not be marshaled.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Stable error codes as seen by the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeErrorCode {
    /// Provider failure.
    ProviderFailed,
    /// Unknown method.
    UnknownMethod,
    /// Bad arguments.
    InvalidArguments,
    /// Lookup miss.
    SscdNotFound,
    /// Marshaling failure.
    SerializationFailed,
}

impl BridgeError {
    /// The code reported for this error.
    pub fn code(&self) -> BridgeErrorCode {
        match self {
            Self::Provider(_) => BridgeErrorCode::ProviderFailed,
            Self::UnknownMethod { .. } => BridgeErrorCode::UnknownMethod,
            Self::InvalidArguments { .. } => BridgeErrorCode::InvalidArguments,
            Self::SscdNotFound { .. } => BridgeErrorCode::SscdNotFound,
            Self::Serialization(_) => BridgeErrorCode::SerializationFailed,
        }
    }

    /// Create an invalid-arguments error.
    #[must_use]
    pub fn invalid_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
