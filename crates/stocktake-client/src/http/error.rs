/*
[INPUT]:  Error sources (HTTP, API payloads, storage, timeouts, cancellation)
[OUTPUT]: Structured error types plus display-ready normalized form
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the normalized shape
*/

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::StoreError;

/// Fixed message shown when a request exceeds its timeout budget.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Kindly retry.";

/// Fallback message when a server error payload cannot be parsed.
pub const GENERIC_ERROR_MESSAGE: &str =
    "We could not proceed with your request due to an error.";

/// Main error type for the stocktake client
#[derive(Error, Debug)]
pub enum StocktakeError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {title}: {message}")]
    Api {
        status: u16,
        title: String,
        message: String,
    },

    /// Request exceeded its timeout budget
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Request was aborted through the cancellation switch
    #[error("Request was cancelled")]
    Cancelled,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Token store read/write failed
    #[error("Token store error: {0}")]
    Store(#[from] StoreError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Uniform `{title, message}` pair for presenting any failure.
///
/// Every error variant maps to the same shape so callers never branch
/// on the failure source when displaying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedError {
    pub title: String,
    pub message: String,
}

impl StocktakeError {
    /// Map this error to its display-ready form
    pub fn normalized(&self) -> NormalizedError {
        match self {
            StocktakeError::Api { title, message, .. } => NormalizedError {
                title: title.clone(),
                message: message.clone(),
            },
            StocktakeError::Timeout { .. } => NormalizedError {
                title: "Timeout".to_string(),
                message: TIMEOUT_MESSAGE.to_string(),
            },
            StocktakeError::Cancelled => NormalizedError {
                title: "Cancelled".to_string(),
                message: "The request was abandoned.".to_string(),
            },
            _ => NormalizedError {
                title: "Error".to_string(),
                message: GENERIC_ERROR_MESSAGE.to_string(),
            },
        }
    }

    /// Check if error indicates an invalid or expired credential
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            StocktakeError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED.as_u16()
                    || *status == StatusCode::FORBIDDEN.as_u16()
        )
    }

    /// Check if error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, StocktakeError::Timeout { .. })
    }

    /// Check if error is a deliberate cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StocktakeError::Cancelled)
    }

    /// Build an API error from a status code and the server's raw body.
    ///
    /// The server reports errors as `{"error": <title>, "message": <detail>}`.
    /// Anything that does not parse into that shape gets the generic message.
    pub fn from_error_body(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorPayload {
            error: String,
            message: String,
        }

        match serde_json::from_str::<ErrorPayload>(body) {
            Ok(payload) => StocktakeError::Api {
                status: status.as_u16(),
                title: payload.error,
                message: payload.message,
            },
            Err(_) => StocktakeError::Api {
                status: status.as_u16(),
                title: "Error".to_string(),
                message: GENERIC_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

/// Result type alias for stocktake operations
pub type Result<T> = std::result::Result<T, StocktakeError>;
