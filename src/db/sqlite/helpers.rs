//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteQueryResult;

use crate::db::{DbError, DbResult};

/// Translate a sqlx failure, separating constraint violations from the rest.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &e
        && matches!(
            db_err.kind(),
            ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        )
    {
        return DbError::Constraint {
            message: db_err.message().to_string(),
        };
    }
    DbError::Database {
        message: e.to_string(),
    }
}

/// Turn a DELETE that touched nothing into NotFound.
pub fn expect_deleted(result: SqliteQueryResult, entity_type: &str, id: &str) -> DbResult<()> {
    if result.rows_affected() == 0 {
        return Err(DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}
