//! Tests for database error types.

use crate::db::{DbError, DbResult};
use crate::domain::ValidationError;

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Board".to_string(),
        id: "abc12345".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Board with id 'abc12345'");
}

#[test]
fn invalid_data_error_displays_correctly() {
    let err = DbError::InvalidData {
        message: "title cannot be empty".to_string(),
        help: "Provide a non-empty title".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid data: title cannot be empty");
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 0002".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 0002"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}

#[test]
fn constraint_error_displays_correctly() {
    let err = DbError::Constraint {
        message: "FOREIGN KEY constraint failed".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Constraint violation: FOREIGN KEY constraint failed"
    );
}

#[test]
fn validation_error_becomes_invalid_data() {
    let err: DbError = ValidationError::Required {
        field: "Board title",
    }
    .into();
    match err {
        DbError::InvalidData { message, .. } => assert_eq!(message, "Board title is required"),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::NotFound {
        entity_type: "Card".to_string(),
        id: "12345678".to_string(),
    });
    assert!(result.is_err());
}
