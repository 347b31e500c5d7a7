//! Error mapping shared by the Diesel repositories.
//!
//! Storage messages reach API clients unchanged, so the helpers keep the
//! driver's own text rather than substituting generic phrases.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StorageError;

use super::pool::PoolError;

/// Map a pool failure to a connection error.
pub(crate) fn map_pool_error(error: PoolError) -> StorageError {
    debug!(%error, "connection checkout failed");
    StorageError::connection(error.message())
}

/// Map a Diesel failure, keeping the database's message when there is one.
pub(crate) fn map_diesel_error(error: DieselError) -> StorageError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StorageError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => StorageError::query(info.message()),
        other => StorageError::query(other.to_string()),
    }
}
