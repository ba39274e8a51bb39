use gloo_storage::{LocalStorage, Storage};

const LAST_BOARD_KEY: &str = "kanban.lastBoard";

pub fn remember_board(id: &str) {
    let _ = LocalStorage::set(LAST_BOARD_KEY, id);
}

pub fn last_board() -> Option<String> {
    LocalStorage::get(LAST_BOARD_KEY).ok()
}

pub fn forget_board(id: &str) {
    if last_board().as_deref() == Some(id) {
        LocalStorage::delete(LAST_BOARD_KEY);
    }
}
