//! Error types for the Tehnomir API client.
//!
//! # Design
//! The vendor reports failures two ways: a non-200 status with an error
//! envelope, and occasionally a 200 with `success: false`. Both land in
//! `Vendor` when the error record is readable. A `success: false` without a
//! readable record becomes `UnexpectedResponse`. Nothing is retried.

use thiserror::Error;

use crate::endpoint::{Endpoint, PayloadShape};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `TehnomirClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The vendor answered with an error record.
    #[error("{status}:{name} - {message}")]
    Vendor {
        status: i64,
        name: String,
        message: String,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("unexpected response from {endpoint}")]
    UnexpectedResponse { endpoint: Endpoint },

    /// A body of the wrong shape was routed to an endpoint.
    #[error("{payload:?} payload cannot be sent to {endpoint}")]
    PayloadMismatch {
        endpoint: Endpoint,
        payload: PayloadShape,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
