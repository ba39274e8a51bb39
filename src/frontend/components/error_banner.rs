use kanban::view::BoardAction;
use leptos::prelude::*;

use crate::store::use_board_store;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_board_store();

    move || {
        store.with(|s| s.error.clone()).map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button on:click=move |_| store.dispatch(BoardAction::DismissError)>"×"</button>
                </div>
            }
        })
    }
}
