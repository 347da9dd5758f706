use std::backtrace::Backtrace;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed enumeration of failure categories
///
/// Each classified kind is tagged by exactly one HTTP status code; every
/// other status code is [`ErrorKind::Unclassified`] and produces no
/// response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request payload failed validation (400)
    ValidationError,
    /// Request lacks valid credentials (401)
    Unauthorized,
    /// Credentials are valid but access is denied (403)
    Forbidden,
    /// Requested document does not exist (404)
    NotFound,
    /// Unexpected internal failure (500)
    ServerError,
    /// Status code outside the classified set
    Unclassified,
}

impl ErrorKind {
    /// Classify an HTTP status code into an error kind
    ///
    /// Total over all status codes; anything outside the five classified
    /// values maps to [`ErrorKind::Unclassified`].
    #[must_use]
    pub fn classify(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::ValidationError,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::ServerError,
            _ => Self::Unclassified,
        }
    }

    /// Response title for this kind, or `None` for unclassified errors
    ///
    /// The strings are part of the wire contract and must not change.
    #[must_use]
    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::ValidationError => Some("Validation Failed"),
            Self::Unauthorized => Some("Unauthorized"),
            Self::Forbidden => Some("forbidden"),
            Self::NotFound => Some("Not Found"),
            Self::ServerError => Some("server error"),
            Self::Unclassified => None,
        }
    }
}

/// An application failure tagged with the HTTP status code that selects
/// its response shape
///
/// Constructed by resource handlers when an operation cannot complete and
/// consumed exactly once when the response is written. The diagnostic
/// trace is captured at construction and is not stable across versions.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
    trace: String,
}

impl ApiError {
    fn tagged(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    /// A 400 validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::tagged(StatusCode::BAD_REQUEST, message)
    }

    /// A 401 authentication failure
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::tagged(StatusCode::UNAUTHORIZED, message)
    }

    /// A 403 access denial
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::tagged(StatusCode::FORBIDDEN, message)
    }

    /// A 404 missing-document failure
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::tagged(StatusCode::NOT_FOUND, message)
    }

    /// A 500 internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::tagged(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Tag a failure with an explicit status code
    ///
    /// Statuses outside the classified set stay unclassified and will
    /// produce no response body.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::tagged(status, message)
    }

    /// The status code that selects this error's response shape
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Human-readable failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classified kind for this error's status code
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::classify(self.status)
    }

    /// Produce the single response body for this error
    ///
    /// Returns `None` for unclassified errors; the caller writes no body
    /// and logs the event instead.
    #[must_use]
    pub fn body(&self) -> Option<ErrorBody> {
        self.kind().title().map(|title| ErrorBody {
            title: title.to_owned(),
            message: self.message.clone(),
            stack_trace: self.trace.clone(),
        })
    }
}

/// JSON body written for a classified failure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Title derived from the error kind, fixed per the table in
    /// [`ErrorKind::title`]
    pub title: String,
    /// Free-text failure message, passed through unchanged
    pub message: String,
    /// Diagnostic backtrace text, for debugging only
    pub stack_trace: String,
}
