//! Service-level errors and their coarse classification.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;
use crate::domain::ValidationError;

/// What went wrong, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    Conflict,
    Internal,
}

/// Errors raised by application services.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    /// The entity addressed by the request does not exist.
    #[error("{entity} '{id}' not found")]
    #[diagnostic(code(kanban::service::not_found))]
    NotFound { entity: &'static str, id: String },

    /// A parent referenced from the request body does not exist.
    #[error("{entity} '{id}' not found")]
    #[diagnostic(
        code(kanban::service::reference_not_found),
        help("Check the {entity} id referenced in the request")
    )]
    ReferenceNotFound { entity: &'static str, id: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn reference_not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::ReferenceNotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::ReferenceNotFound { .. } | Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::Database(DbError::NotFound { .. }) => ErrorKind::NotFound,
            Self::Database(DbError::Constraint { .. }) => ErrorKind::Conflict,
            Self::Database(_) => ErrorKind::Internal,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
