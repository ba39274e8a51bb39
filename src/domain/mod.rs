//! Kanban domain model.
//!
//! Value objects validate primitive input; entities aggregate them and own
//! their identity and timestamps. Nothing in here touches storage.
//!
//! # Architecture
//!
//! - `error`: Validation failures raised by value objects
//! - `value_objects`: Ids, titles, descriptions, positions, colors, due dates
//! - `board`, `list`, `card`: Entities with `create`/`reconstruct` factories

mod board;
mod card;
mod error;
mod list;
mod value_objects;

#[cfg(test)]
mod board_test;
#[cfg(test)]
mod card_test;
#[cfg(test)]
mod value_objects_test;

pub use board::{Board, BoardChanges, BoardPrimitives, NewBoard};
pub use card::{Card, CardChanges, CardPrimitives, NewCard};
pub use error::ValidationError;
pub use list::{List, ListChanges, ListPrimitives, NewList};
pub use value_objects::*;

use chrono::{DateTime, SubsecRound, Utc};

/// Current instant at the microsecond precision timestamp columns keep.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
