//! Validation errors raised when constructing value objects.

use miette::Diagnostic;
use thiserror::Error;

/// A primitive value was rejected by a value object.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    #[diagnostic(code(kanban::domain::required))]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    #[diagnostic(code(kanban::domain::too_long))]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be zero or greater (got {value})")]
    #[diagnostic(code(kanban::domain::negative))]
    Negative { field: &'static str, value: i64 },

    #[error("Background color '{value}' is not a hex color code such as #0079bf")]
    #[diagnostic(code(kanban::domain::invalid_color))]
    InvalidColor { value: String },

    #[error("Due date '{value}' is not an ISO 8601 date or date-time")]
    #[diagnostic(
        code(kanban::domain::invalid_date),
        help("Use 2025-01-31 or 2025-01-31T17:00:00Z")
    )]
    InvalidDate { value: String },
}
