//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `catalog_core::storage`. Constraint failures become semantic variants:
//! UNIQUE becomes `AlreadyExists`, FOREIGN KEY and CHECK become `InvalidData`.

use catalog_core::storage::RepositoryError;
use rusqlite::ffi;

fn constraint_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Some(sqlite_err.extended_code)
        }
        _ => None,
    }
}

/// Maps a rusqlite error to a `RepositoryError`, using `id` for the entity
/// identifier in `NotFound` and `AlreadyExists`.
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match constraint_code(err) {
        Some(ffi::SQLITE_CONSTRAINT_UNIQUE) | Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) => {
            return RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            };
        }
        Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
            return RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            ));
        }
        Some(ffi::SQLITE_CONSTRAINT_CHECK) => {
            return RepositoryError::InvalidData(format!(
                "Check constraint violation for {entity_type}"
            ));
        }
        _ => {}
    }

    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a `RepositoryError`.
///
/// Use this when no single entity identifier applies, e.g. collection queries.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, entity_type, "unknown")
}

/// Maps a tokio_rusqlite error with a known identifier to a `RepositoryError`.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id)
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
