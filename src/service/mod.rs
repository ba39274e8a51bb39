//! Application services.
//!
//! Services sit between transport and storage: they check that referenced
//! parents exist, pick default positions and turn domain failures into
//! [`ServiceError`]s with a transport-neutral [`ErrorKind`].

mod board;
mod card;
mod error;
mod list;


pub use board::BoardService;
pub use card::{CardService, CreateCard, DEFAULT_UPCOMING_DAYS, UpdateCard};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use list::{CreateList, ListService};
