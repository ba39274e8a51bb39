//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod board;
mod card;
mod connection;
mod helpers;
mod list;

#[cfg(test)]
mod board_test;
#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod list_test;

pub use board::SqliteBoardRepository;
pub use card::SqliteCardRepository;
pub use connection::SqliteDatabase;
pub use list::SqliteListRepository;
