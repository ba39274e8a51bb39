use kanban::view::{BoardAction, CardView, DragPayload};
use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dialog::{ask_title, confirm};
use crate::store::use_board_store;

#[component]
pub fn CardItem(card: CardView) -> impl IntoView {
    let store = use_board_store();

    let payload = DragPayload::new(card.id.clone(), card.list_id.clone());
    let on_drag_start = move |ev: DragEvent| {
        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        match payload.write_to(|format, json| transfer.set_data(format, json)) {
            Ok(()) => transfer.set_effect_allowed("move"),
            Err(e) => store.fail(format!("Cannot drag card: {e}")),
        }
    };

    let edit = {
        let id = card.id.clone();
        let current = card.title.clone();
        move |_: MouseEvent| {
            let Some(title) = ask_title("Card title", &current) else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                match api::cards::rename(&id, &title).await {
                    Ok(card) => store.dispatch(BoardAction::CardUpdated(card)),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    let remove = {
        let id = card.id.clone();
        move |_: MouseEvent| {
            if !confirm("Delete this card?") {
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                match api::cards::delete(&id).await {
                    Ok(()) => store.dispatch(BoardAction::CardRemoved(id)),
                    Err(e) => store.fail(e),
                }
            });
        }
    };

    let due = card.due_day().map(str::to_string);
    let description = (!card.description.is_empty()).then(|| card.description.clone());

    view! {
        <article class="card" draggable="true" on:dragstart=on_drag_start>
            <div class="card-title">{card.title.clone()}</div>
            {description.map(|d| view! { <p class="card-description">{d}</p> })}
            {due.map(|d| view! { <span class="card-due">{d}</span> })}
            <div class="card-actions">
                <button title="Edit" on:click=edit>"✎"</button>
                <button title="Delete" on:click=remove>"×"</button>
            </div>
        </article>
    }
}
