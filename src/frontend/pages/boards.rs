use kanban::view::BoardSummary;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClientError};
use crate::dialog::{ask_title, confirm};
use crate::storage;

#[component]
pub fn Boards() -> impl IntoView {
    let (boards, set_boards) = signal(None::<Result<Vec<BoardSummary>, ApiClientError>>);
    let (refetch, set_refetch) = signal(0u32);
    let (error, set_error) = signal(None::<String>);
    let last_board = storage::last_board();

    Effect::new(move || {
        let _ = refetch.get();
        spawn_local(async move {
            set_boards.set(Some(api::boards::list().await));
        });
    });

    let create = move |_: MouseEvent| {
        let Some(title) = ask_title("Board title", "") else {
            return;
        };
        spawn_local(async move {
            match api::boards::create(&title).await {
                Ok(_) => set_refetch.update(|n| *n = n.wrapping_add(1)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let remove = move |id: String| {
        if !confirm("Delete this board with all its lists and cards?") {
            return;
        }
        spawn_local(async move {
            match api::boards::delete(&id).await {
                Ok(()) => {
                    storage::forget_board(&id);
                    set_refetch.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h2>"Boards"</h2>
                <button on:click=create>"+ New board"</button>
            </header>
            {last_board.map(|id| view! {
                <p class="resume"><a href=format!("/b/{}", id)>"Continue with last board →"</a></p>
            })}
            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
            {move || match boards.get() {
                None => view! { <p class="empty">"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error-banner">{e.to_string()}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty">"No boards yet."</p> }.into_any()
                }
                Some(Ok(list)) => view! {
                    <ul class="board-grid">
                        {list
                            .into_iter()
                            .map(|board| {
                                let id = board.id.clone();
                                view! {
                                    <li class="board-tile" style=format!("background-color: {}", board.background_color)>
                                        <a href=format!("/b/{}", board.id)>{board.title.clone()}</a>
                                        <button title="Delete" on:click=move |_| remove(id.clone())>"×"</button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
