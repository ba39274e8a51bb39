//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends to be swapped without changing
//! business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation
//! - `utils`: Timestamp encoding shared by adapters

mod error;
mod repository;
pub mod sqlite;
pub mod utils;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use repository::*;
pub use sqlite::SqliteDatabase;
