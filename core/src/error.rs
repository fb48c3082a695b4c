//! Error types for the resource client.
//!
//! # Design
//! Every `parse_*` method returns `Result<T, ApiError>`, whatever the
//! resource. `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status". Both status variants keep the raw response body so the
//! server's explanation reaches the caller.

use thiserror::Error;

/// Errors returned by `HomebaseClient` build/parse methods and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found: {body}")]
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("transport failed: {0}")]
    TransportError(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body text carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { body } | ApiError::HttpError { body, .. } => Some(body),
            _ => None,
        }
    }
}
