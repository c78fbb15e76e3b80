//! Card Tag Row
//!
//! Chips for the card's current tags plus the edit button that opens the
//! selection popup. Applying a selection patches the store first, then
//! queues the field update; a failed round trip raises a toast and keeps
//! the optimistic state.

use leptos::prelude::*;
use serde_json::json;

use crate::api::FieldUpdate;
use crate::context::use_app_context;
use crate::log::console_error;
use crate::models::BoardItem;
use crate::store::{store_set_item_tags, use_board_store};

use super::tag_popup::TagPopup;

#[component]
pub fn TagRow(item: BoardItem, current_tags: Memo<Vec<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let (popup_open, set_popup_open) = signal(false);

    let has_tag_field = item.tag_field.is_some() && !item.tag_options.is_empty();

    let apply_selection = {
        let item = item.clone();
        let ctx = ctx.clone();
        move |selected: Vec<String>| {
            set_popup_open.set(false);
            let Some(field_name) = item.tag_field.clone() else {
                return;
            };
            if selected == current_tags.get_untracked() {
                return;
            }

            store_set_item_tags(&store, item.data_id, &selected);

            let update = FieldUpdate {
                data_id: item.data_id,
                table_name: item.table_name.clone(),
                update_url: item.update_url.clone(),
                field_name,
                value: json!(selected),
            };
            let toasts = ctx.toasts;
            ctx.updates.enqueue(update, ctx.csrf_token.clone(), move |result| {
                if let Err(e) = result {
                    console_error(&format!("[KANBAN] tag update failed: {e}"));
                    toasts.error("Could not save tags");
                }
            });
        }
    };

    let chips = {
        let item = item.clone();
        move || {
            let tags = current_tags.get();
            if tags.is_empty() {
                return view! { <span class="kanban-tag-empty">"No tags"</span> }.into_any();
            }
            tags.iter()
                .filter_map(|key| item.tag_label(key))
                .map(|label| {
                    view! { <span class="kanban-tag-chip">{label.to_string()}</span> }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    let popup = {
        let item = item.clone();
        move || {
            popup_open.get().then(|| {
                let apply_selection = apply_selection.clone();
                view! {
                    <TagPopup
                        options=item.tag_options.clone()
                        initial=current_tags.get_untracked()
                        allow_multiple=item.allow_multiple_tags
                        on_apply=Callback::new(move |selected| apply_selection(selected))
                        on_cancel=Callback::new(move |_| set_popup_open.set(false))
                    />
                }
            })
        }
    };

    view! {
        {has_tag_field.then(|| view! {
            <div class="kanban-item-tags">
                {chips}
                <button
                    class="kanban-tag-edit"
                    title="Edit tags"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_popup_open.set(true);
                    }
                >
                    "🏷"
                </button>
                {popup}
            </div>
        })}
    }
}
