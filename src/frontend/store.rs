//! Board page state shared through context.

use kanban::view::{BoardAction, BoardState, reduce};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BoardStore(RwSignal<BoardState>);

impl BoardStore {
    pub fn new() -> Self {
        Self(RwSignal::new(BoardState::default()))
    }

    pub fn dispatch(&self, action: BoardAction) {
        self.0.update(|state| *state = reduce(state, action));
    }

    pub fn fail(&self, error: impl std::fmt::Display) {
        self.dispatch(BoardAction::Failed(error.to_string()));
    }

    /// Reactive read access.
    pub fn with<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.0.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.0.with_untracked(f)
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
