//! Blocking browser dialogs.

use kanban::view::prompt_title;
use leptos::prelude::window;

/// Ask for a title; `None` when cancelled or left blank.
pub fn ask_title(message: &str, current: &str) -> Option<String> {
    let answer = window()
        .prompt_with_message_and_default(message, current)
        .ok()
        .flatten();
    prompt_title(answer.as_deref())
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}
