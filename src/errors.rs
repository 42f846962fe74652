//! Error handling for the Orpheus demo service
//!
//! A single crate-wide error enum with constructor helpers. Handlers return
//! these directly; the `IntoResponse` impl maps each variant to an HTTP
//! status and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Main error type for the Orpheus service
#[derive(Error, Debug)]
pub enum OrpheusError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Operation busy: {operation}")]
    Busy { operation: String },

    #[error("Storage operation failed: {operation} - {source}")]
    Storage {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Result with OrpheusError
pub type OrpheusResult<T> = Result<T, OrpheusError>;

impl OrpheusError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a busy error for an operation that is already in flight
    pub fn busy(operation: impl Into<String>) -> Self {
        Self::Busy {
            operation: operation.into(),
        }
    }

    /// Create a storage error
    pub fn storage(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for OrpheusError {
    fn into_response(self) -> Response {
        let status = match self {
            OrpheusError::Config { .. } | OrpheusError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            OrpheusError::Busy { .. } => StatusCode::CONFLICT,
            OrpheusError::Storage { .. }
            | OrpheusError::Serialization { .. }
            | OrpheusError::Io { .. }
            | OrpheusError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Convert from sled errors
impl From<sled::Error> for OrpheusError {
    fn from(err: sled::Error) -> Self {
        OrpheusError::storage("sled_operation", err)
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for OrpheusError {
    fn from(err: serde_json::Error) -> Self {
        OrpheusError::serialization("json_operation", err)
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for OrpheusError {
    fn from(err: std::io::Error) -> Self {
        OrpheusError::io("io_operation", err)
    }
}

/// Convert from figment errors
impl From<figment::Error> for OrpheusError {
    fn from(err: figment::Error) -> Self {
        OrpheusError::config(err.to_string())
    }
}

/// Convert from a rejected simulated-operation invocation
impl From<crate::simulation::OpBusy> for OrpheusError {
    fn from(err: crate::simulation::OpBusy) -> Self {
        OrpheusError::busy(err.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = OrpheusError::config("missing config file");
        assert!(config_err.to_string().contains("Configuration error"));

        let validation_err = OrpheusError::validation("private_key", "too short");
        assert!(validation_err.to_string().contains("private_key"));
    }

    #[test]
    fn test_error_chaining() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = OrpheusError::io("reading key file", io_err);

        assert!(err.source().is_some());
        assert!(err.to_string().contains("I/O operation failed"));
    }

    #[test]
    fn test_status_mapping() {
        let resp = OrpheusError::validation("field", "bad").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = OrpheusError::busy("risk analysis").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = OrpheusError::internal("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
