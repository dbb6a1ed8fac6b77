//! Error types for Pixkit operations.
//!
//! Every encoder error is an input-validation error detected before any
//! output is produced. Only backend failures surfaced through the charge
//! service are worth retrying.

use std::fmt;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PixkitErrorCode {
    /// Resource not found
    NotFound = 4000,
    /// Invalid request/data
    InvalidData = 5000,
    /// Amount negative, NaN or non-finite
    InvalidAmount = 5001,
    /// Required field empty
    MissingField = 5002,
    /// Field does not fit its length prefix
    OversizeField = 5003,
    /// Payload could not be parsed
    InvalidPayload = 5004,
    /// Payload CRC does not match its content
    ChecksumMismatch = 5005,
    /// Serialization error
    Serialization = 5006,
    /// Backend-as-a-service call failed
    Backend = 7000,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Comprehensive error type for Pixkit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixkitError {
    /// Amount is negative, NaN, non-finite or not a decimal number.
    InvalidAmount(String),

    /// A required input (key, name, city) is empty.
    MissingField(&'static str),

    /// A value exceeds the capacity of its length encoding.
    OversizeField {
        /// Field name or tag
        field: String,
        /// Actual length in characters
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Invalid data provided.
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A BR Code payload is structurally malformed.
    InvalidPayload(String),

    /// The trailing CRC does not match the payload content.
    ChecksumMismatch {
        /// CRC carried by the payload
        expected: String,
        /// CRC computed over the payload
        actual: String,
    },

    /// Resource not found (merchant, charge).
    NotFound {
        /// Type of resource (e.g., "merchant", "charge")
        resource_type: String,
        /// Resource identifier
        identifier: String,
    },

    /// Backend-as-a-service call failed.
    Backend(String),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Internal/unexpected error.
    Internal(String),
}

impl PixkitError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> PixkitErrorCode {
        match self {
            Self::InvalidAmount(_) => PixkitErrorCode::InvalidAmount,
            Self::MissingField(_) => PixkitErrorCode::MissingField,
            Self::OversizeField { .. } => PixkitErrorCode::OversizeField,
            Self::InvalidData { .. } => PixkitErrorCode::InvalidData,
            Self::InvalidPayload(_) => PixkitErrorCode::InvalidPayload,
            Self::ChecksumMismatch { .. } => PixkitErrorCode::ChecksumMismatch,
            Self::NotFound { .. } => PixkitErrorCode::NotFound,
            Self::Backend(_) => PixkitErrorCode::Backend,
            Self::Serialization(_) => PixkitErrorCode::Serialization,
            Self::Internal(_) => PixkitErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if this error is potentially recoverable by retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// Create a backend error from any error type.
    pub fn backend<E: std::error::Error>(err: E) -> Self {
        Self::Backend(err.to_string())
    }

    /// Create a not found error.
    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an oversize field error.
    pub fn oversize(field: impl Into<String>, len: usize, max: usize) -> Self {
        Self::OversizeField {
            field: field.into(),
            len,
            max,
        }
    }
}

impl fmt::Display for PixkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(reason) => write!(f, "invalid amount: {}", reason),
            Self::MissingField(field) => write!(f, "missing required field: {}", field),
            Self::OversizeField { field, len, max } => {
                write!(
                    f,
                    "{} is {} characters long, at most {} allowed",
                    field, len, max
                )
            }
            Self::InvalidData { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            Self::InvalidPayload(msg) => write!(f, "invalid payload: {}", msg),
            Self::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "checksum mismatch: payload carries {}, computed {}",
                    expected, actual
                )
            }
            Self::NotFound {
                resource_type,
                identifier,
            } => {
                write!(f, "{} not found: {}", resource_type, identifier)
            }
            Self::Backend(msg) => write!(f, "backend error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for PixkitError {}

impl From<serde_json::Error> for PixkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
