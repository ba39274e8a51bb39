use kanban::view::{BoardAction, ListView, MoveIntent, TRANSFER_FORMAT};
use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::CardItem;
use crate::api;
use crate::dialog::{ask_title, confirm};
use crate::store::use_board_store;

#[component]
pub fn ListColumn(list: ListView) -> impl IntoView {
    let store = use_board_store();
    let drag_over = RwSignal::new(false);

    let rename = {
        let id = list.id.clone();
        let current = list.title.clone();
        move |_: MouseEvent| {
            let Some(title) = ask_title("List title", &current) else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                match api::lists::rename(&id, &title).await {
                    Ok(list) => store.dispatch(BoardAction::ListUpdated(list)),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    let remove = {
        let id = list.id.clone();
        move |_: MouseEvent| {
            if !confirm("Delete this list and all its cards?") {
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                match api::lists::delete(&id).await {
                    Ok(()) => store.dispatch(BoardAction::ListRemoved(id)),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    let add_card = {
        let id = list.id.clone();
        move |_: MouseEvent| {
            let Some(title) = ask_title("Card title", "") else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                match api::cards::create(&id, &title).await {
                    Ok(card) => store.dispatch(BoardAction::CardAdded(card)),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    // Drops append the card to this list; drops on the source list do nothing.
    let on_drop = {
        let target = list.id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            drag_over.set(false);

            let Some(raw) = ev
                .data_transfer()
                .and_then(|transfer| transfer.get_data(TRANSFER_FORMAT).ok())
            else {
                return;
            };
            let position = store.with_untracked(|s| s.cards_in(&target).len() as i64);
            let Some(intent) = MoveIntent::from_drop(&raw, &target, Some(position)) else {
                return;
            };

            spawn_local(async move {
                let position = intent.position.unwrap_or(0);
                match api::cards::move_to(&intent.card_id, &intent.target_list_id, position).await {
                    Ok(card) => store.dispatch(BoardAction::CardMoved {
                        previous_id: intent.card_id,
                        card,
                    }),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    let list_id = list.id.clone();
    let cards = move || store.with(|s| s.cards_in(&list_id).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <section
            class="list"
            class:drag-over=move || drag_over.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                drag_over.set(true);
            }
            on:dragleave=move |_: DragEvent| drag_over.set(false)
            on:drop=on_drop
        >
            <header class="list-header">
                <h3>{list.title.clone()}</h3>
                <button title="Rename" on:click=rename>"✎"</button>
                <button title="Delete" on:click=remove>"×"</button>
            </header>
            <div class="cards">
                <For
                    each=cards
                    key=|card| (card.id.clone(), card.title.clone(), card.position)
                    let:card
                >
                    <CardItem card=card/>
                </For>
            </div>
            <button class="add-card" on:click=add_card>"+ Add card"</button>
        </section>
    }
}
