//! Error types for the zone synchronization system
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

use crate::rrset::RecordType;

/// Result type alias for synchronization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the zone synchronization system
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed domain/host name, out-of-range TTL, or other bad input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record value is not a valid literal address for its declared type
    #[error("Invalid {expected} record value: {value:?}")]
    InvalidAddress {
        /// The offending value
        value: String,
        /// The record type the value was checked against
        expected: RecordType,
    },

    /// Attempt to synchronize a record type outside A/AAAA
    #[error("Unsupported record type for synchronization: {0}")]
    UnsupportedRecordType(RecordType),

    /// A single set_record call spanned more than one record name
    #[error("Cannot update more than one record set at a time (got names: {})", .0.join(", "))]
    MultiRecordSet(Vec<String>),

    /// The DNS provider returned a non-success status or an unparseable body
    #[error("Remote provider error (status {status}): {detail}")]
    Remote {
        /// HTTP status code of the failed response
        status: u16,
        /// Response body or parse failure detail
        detail: String,
    },

    /// HTTP transport errors (connect failures, timeouts)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors (instance store files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Instance not found in the registry
    #[error("Instance not found: {0}")]
    NotFound(String),

    /// The instance currently has no public address
    #[error("No public address available for instance {0}")]
    AddressUnavailable(String),

    /// Credential fetch failed; no network calls may be attempted
    #[error("Secret retrieval failed: {0}")]
    SecretRetrieval(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-address error for a record value
    pub fn invalid_address(value: impl Into<String>, expected: RecordType) -> Self {
        Self::InvalidAddress {
            value: value.into(),
            expected,
        }
    }

    /// Create a remote provider error
    pub fn remote(status: u16, detail: impl Into<String>) -> Self {
        Self::Remote {
            status,
            detail: detail.into(),
        }
    }

    /// Create an HTTP transport error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an address-unavailable error
    pub fn address_unavailable(instance: impl Into<String>) -> Self {
        Self::AddressUnavailable(instance.into())
    }

    /// Create a secret retrieval error
    pub fn secret(msg: impl Into<String>) -> Self {
        Self::SecretRetrieval(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
