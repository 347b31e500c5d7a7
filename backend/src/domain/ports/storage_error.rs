//! Failure raised by any repository adapter.
//!
//! The driver's message is kept verbatim; the API reports it as-is. Whether
//! it becomes a 500 or a 400 depends on the operation, not the failure, so
//! handlers pick [`StorageError::into_read_error`] or
//! [`StorageError::into_write_error`].

use tracing::{error, warn};

use super::define_port_error;
use crate::domain::{Error, TraceId};

define_port_error! {
    /// Errors raised by candidate and voter repositories.
    pub enum StorageError {
        /// A pooled connection could not be obtained.
        Connection { message: String } => "{message}",
        /// The statement failed or its rows could not be decoded.
        Query { message: String } => "{message}",
    }
}

fn current_trace_id() -> String {
    TraceId::current().map(|id| id.to_string()).unwrap_or_default()
}

impl StorageError {
    /// Driver text carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message,
        }
    }

    /// Report a failed read as a server error.
    pub fn into_read_error(self) -> Error {
        let trace_id = current_trace_id();
        error!(error = %self, %trace_id, "storage read failed");
        Error::internal(self.message())
    }

    /// Report a failed write as a rejected request.
    pub fn into_write_error(self) -> Error {
        let trace_id = current_trace_id();
        warn!(error = %self, %trace_id, "storage write rejected");
        Error::invalid_request(self.message())
    }
}
