//! Board, list and card handlers.

mod boards;
mod cards;
mod lists;
mod response;


pub use boards::*;
pub use cards::*;
pub use lists::*;
pub use response::{ApiErrorResponse, ApiResponse, MessageResponse, status_for};
