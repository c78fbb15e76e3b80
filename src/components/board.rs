//! Board Root
//!
//! The column row plus the drop handler. A completed drop patches the
//! store immediately, then queues the category-field update; the card
//! stays where the user put it even if the call fails.

use leptos::prelude::*;
use leptos_board_dnd::{bind_global_mouseup, create_dnd_signals, DropEvent};
use serde_json::json;

use crate::api::FieldUpdate;
use crate::context::{use_app_context, AppContext};
use crate::log::console_error;
use crate::store::{store_move_item, use_board_store, BoardStateStoreFields, BoardStore};

use super::board_column::BoardColumn;

#[component]
pub fn Board() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    {
        let ctx = ctx.clone();
        bind_global_mouseup(dnd, move |drop: DropEvent| {
            handle_drop(&store, &ctx, drop);
        });
    }

    let column_ids = move || {
        store
            .columns()
            .read()
            .iter()
            .map(|c| c.id.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="kanban-container">
            <For
                each=column_ids
                key=|id| id.clone()
                children=move |id| view! { <BoardColumn column_id=id dnd=dnd/> }
            />
        </div>
    }
}

/// Complete one drop: validate the target, patch the store, queue the
/// category-field update.
fn handle_drop(store: &BoardStore, ctx: &AppContext, drop: DropEvent) {
    let (field_name, target_key, card) = {
        let columns = store.columns().read_untracked();
        let Some(source) = columns.iter().find(|c| c.id == drop.from_column) else {
            console_error(&format!("[KANBAN] unknown source column {}", drop.from_column));
            return;
        };
        // Targets outside the column's drag_to list cancel the drag
        if !source.accepts_drop_to(&drop.to_column) {
            return;
        }
        let Some(target) = columns.iter().find(|c| c.id == drop.to_column) else {
            console_error(&format!("[KANBAN] unknown target column {}", drop.to_column));
            return;
        };
        let Some(card) = source.items.iter().find(|i| i.id == drop.card_id) else {
            console_error(&format!("[KANBAN] dropped card {} is not on the board", drop.card_id));
            return;
        };
        (target.field_name.clone(), target.key.clone(), card.clone())
    };

    if !store_move_item(store, &drop.card_id, &drop.from_column, &drop.to_column) {
        return;
    }

    let update = FieldUpdate {
        data_id: card.data_id,
        table_name: card.table_name,
        update_url: card.update_url,
        field_name,
        value: json!(target_key),
    };
    let toasts = ctx.toasts;
    ctx.updates.enqueue(update, ctx.csrf_token.clone(), move |result| match result {
        Ok(()) => toasts.success("Saved"),
        Err(e) => {
            console_error(&format!("[KANBAN] move update failed: {e}"));
            toasts.error("Could not save the move");
        }
    });
}
