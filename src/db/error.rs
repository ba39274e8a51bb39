//! Database error types.
//!
//! Storage-backend agnostic errors, derived with thiserror and reported
//! through miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::ValidationError;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(kanban::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(kanban::db::invalid_data))]
    InvalidData {
        message: String,
        #[help]
        help: String,
    },

    #[error("Database error: {message}")]
    #[diagnostic(code(kanban::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(kanban::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(kanban::db::connection_error))]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(kanban::db::constraint))]
    Constraint { message: String },
}

impl From<ValidationError> for DbError {
    /// A stored row no longer satisfies the domain rules.
    fn from(err: ValidationError) -> Self {
        DbError::InvalidData {
            message: err.to_string(),
            help: "The stored row was written outside the application".to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
