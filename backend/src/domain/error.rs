//! Domain-level error types.
//!
//! The API exposes a deliberately small taxonomy. A rejected request
//! (validation failure, or a write the store refused) is an
//! [`ErrorCode::InvalidRequest`]; a store failure while reading is an
//! [`ErrorCode::InternalError`]. Zero matched rows is never an error.
//!
//! Inbound adapters decide the transport status for each code. The payload
//! always serialises as `{"error": ...}` where the value is either a single
//! message or the list of per-field validation messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was rejected before or by the store.
    InvalidRequest,
    /// The store failed while serving a read.
    InternalError,
}

/// Body of the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Opaque diagnostic text, usually the storage driver's message.
    Message(String),
    /// One message per failing field, in declaration order.
    Fields(Vec<String>),
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Fields(messages) => f.write_str(&messages.join("; ")),
        }
    }
}

/// Domain error payload.
///
/// The trace identifier in scope at construction time is captured so the
/// HTTP adapter can echo it in the response header.
///
/// # Examples
/// ```
/// use election_backend::domain::{Error, ErrorCode};
///
/// let err = Error::validation(vec!["email is required".to_owned()]);
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(
///     serde_json::to_value(&err).unwrap(),
///     serde_json::json!({ "error": ["email is required"] })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    #[serde(skip)]
    code: ErrorCode,
    #[serde(rename = "error")]
    detail: ErrorDetail,
    #[serde(skip)]
    trace_id: Option<String>,
}

impl Error {
    fn new(code: ErrorCode, detail: ErrorDetail) -> Self {
        Self {
            code,
            detail,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// A rejected request carrying a single message.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, ErrorDetail::Message(message.into()))
    }

    /// A rejected request listing every field that failed validation.
    pub fn validation(messages: Vec<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, ErrorDetail::Fields(messages))
    }

    /// A server-side failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, ErrorDetail::Message(message.into()))
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing error body.
    pub fn detail(&self) -> &ErrorDetail {
        &self.detail
    }

    /// Trace identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.detail.fmt(f)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
