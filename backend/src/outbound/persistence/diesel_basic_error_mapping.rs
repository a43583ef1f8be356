//! Diesel and pool error mapping onto [`UserPersistenceError`].

use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Map pool errors into repository connection errors.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors into repository errors, logging the raw cause.
///
/// Only closed connections count as connectivity failures; everything else
/// the database reports is a query failure.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("bad url"))]
    fn pool_errors_are_connection_failures(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            UserPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn not_found_is_a_query_failure() {
        assert_eq!(
            map_diesel_error(diesel::result::Error::NotFound),
            UserPersistenceError::query("record not found")
        );
    }

    #[rstest]
    fn rollback_is_a_query_failure() {
        assert_eq!(
            map_diesel_error(diesel::result::Error::RollbackTransaction),
            UserPersistenceError::query("database error")
        );
    }
}
