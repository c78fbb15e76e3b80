//! Board Column
//!
//! One category column: header with a live card count, the card list,
//! and the drop-target hooks. The column re-reads its slice of the store
//! so drops and tag edits show up without a full board re-render.

use leptos::prelude::*;
use leptos_board_dnd::{make_on_column_mouseenter, make_on_column_mouseleave, DndSignals};

use crate::models::Column;
use crate::store::{use_board_store, BoardStateStoreFields};

use super::card::Card;

#[component]
pub fn BoardColumn(column_id: String, dnd: DndSignals) -> impl IntoView {
    let store = use_board_store();

    let column = {
        let column_id = column_id.clone();
        Memo::new(move |_| {
            store
                .columns()
                .read()
                .iter()
                .find(|c| c.id == column_id)
                .cloned()
        })
    };

    let title = move || column.get().map(|c| c.title).unwrap_or_default();
    let count = move || column.get().map(|c| c.items.len()).unwrap_or(0);

    // Highlight only while a drag from another column hovers here
    let is_drop_target = {
        let column_id = column_id.clone();
        move || {
            dnd.hover_column.get().as_deref() == Some(column_id.as_str())
                && dnd.source_column.get().as_deref() != Some(column_id.as_str())
        }
    };

    let on_mouseenter = make_on_column_mouseenter(dnd, column_id.clone());
    let on_mouseleave = make_on_column_mouseleave(dnd);

    let cards = {
        let column_id = column_id.clone();
        view! {
            <For
                each=move || {
                    column
                        .get()
                        .map(|c: Column| c.items)
                        .unwrap_or_default()
                }
                key=|item| item.id.clone()
                children=move |item| {
                    view! { <Card item=item column_id=column_id.clone() dnd=dnd/> }
                }
            />
        }
    };

    view! {
        <div
            class="kanban-board"
            class=("kanban-board-drop-target", is_drop_target)
            id=column_id.clone()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <header class="kanban-board-header">
                <div class="kanban-title-board">{title}</div>
                <span class="kanban-board-count">{count}</span>
            </header>
            <main class="kanban-drag">{cards}</main>
        </div>
    }
}
