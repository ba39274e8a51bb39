//! Client-side view layer shared by the browser UI and the CLI.
//!
//! Everything here is plain data plus pure functions, so it compiles for
//! both the wasm frontend and the native binaries.

pub mod drag;
pub mod models;
pub mod prompt;
pub mod state;

#[cfg(test)]
mod drag_test;

pub use drag::{DragPayload, MoveIntent, TRANSFER_FORMAT};
pub use models::{ApiEnvelope, BoardSummary, CardView, ListView};
pub use prompt::prompt_title;
pub use state::{BoardAction, BoardState, reduce};
