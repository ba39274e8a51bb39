use kanban::view::BoardAction;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{ErrorBanner, ListColumn};
use crate::dialog::ask_title;
use crate::storage;
use crate::store::BoardStore;

#[component]
pub fn BoardDetail() -> impl IntoView {
    let params = use_params_map();
    let board_id = move || params.read().get("id").unwrap_or_default();

    let store = BoardStore::new();
    provide_context(store);

    Effect::new(move || {
        let id = board_id();
        if id.is_empty() {
            return;
        }
        storage::remember_board(&id);
        store.dispatch(BoardAction::Loading);
        spawn_local(async move {
            match api::load_board(&id).await {
                Ok((board, lists, cards)) => store.dispatch(BoardAction::Loaded {
                    board,
                    lists,
                    cards,
                }),
                Err(e) => store.fail(e),
            }
        });
    });

    let add_list = move |_: MouseEvent| {
        let Some(title) = ask_title("List title", "") else {
            return;
        };
        let id = board_id();
        spawn_local(async move {
            match api::lists::create(&id, &title).await {
                Ok(list) => store.dispatch(BoardAction::ListAdded(list)),
                Err(e) => store.fail(e),
            }
        });
    };

    let title = move || store.with(|s| s.board.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let background = move || {
        store.with(|s| {
            s.board
                .as_ref()
                .map(|b| format!("background-color: {}", b.background_color))
                .unwrap_or_default()
        })
    };
    let lists = move || store.with(|s| s.ordered_lists().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="board" style=background>
            <header class="page-header">
                <a href="/">"← Boards"</a>
                <h2>{title}</h2>
                <button on:click=add_list>"+ Add list"</button>
            </header>
            <ErrorBanner/>
            <Show when=move || store.with(|s| s.loading)>
                <p class="empty">"Loading..."</p>
            </Show>
            <div class="lists">
                <For
                    each=lists
                    key=|list| (list.id.clone(), list.title.clone(), list.position)
                    let:list
                >
                    <ListColumn list=list/>
                </For>
            </div>
        </div>
    }
}
