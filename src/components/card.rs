//! Board Card
//!
//! One record on the board: avatar, title, optional detail line, badge
//! row and tag row, plus the drag handle and the detail-view button.

use leptos::prelude::*;
use leptos_board_dnd::{make_on_card_mousedown, DndSignals};

use crate::context::use_app_context;
use crate::detail::open_detail_view;
use crate::models::BoardItem;
use crate::store::{find_item, use_board_store, BoardStateStoreFields};

use super::avatar::Avatar;
use super::card_badges::CardBadges;
use super::tag_row::TagRow;

#[component]
pub fn Card(item: BoardItem, column_id: String, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let on_mousedown = make_on_card_mousedown(dnd, item.id.clone(), column_id);

    let is_dragging = {
        let card_id = item.id.clone();
        move || dnd.dragging_card.get().as_deref() == Some(card_id.as_str())
    };

    // Tags stay reactive through the store so an applied popup selection
    // re-renders the chips in place.
    let current_tags = {
        let card_id = item.id.clone();
        Memo::new(move |_| {
            let columns = store.columns().read();
            find_item(&columns, &card_id)
                .map(|i| i.current_tags.clone())
                .unwrap_or_default()
        })
    };

    let on_view = {
        let base_url = ctx.base_url.clone();
        let table_name = item.table_name.clone();
        let data_id = item.data_id;
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if dnd.drag_just_ended.get_untracked() {
                return;
            }
            open_detail_view(&base_url, &table_name, data_id);
        }
    };

    view! {
        <div
            class="kanban-item"
            class=("kanban-item-dragging", is_dragging)
            data-eid=item.id.clone()
            on:mousedown=on_mousedown
        >
            <div class="kanban-item-flex">
                <div class="kanban-item-avatar">
                    <Avatar info=item.avatar_info.clone()/>
                </div>
                <div class="kanban-item-content">
                    <div class="kanban-item-header">
                        <span class="kanban-item-text">{item.title.clone()}</span>
                    </div>
                    {(!item.detail.is_empty()).then(|| view! {
                        <div class="kanban-item-detail">{item.detail.clone()}</div>
                    })}
                    <CardBadges item=item.clone()/>
                    <TagRow item=item.clone() current_tags=current_tags/>
                </div>
            </div>
            <div class="kanban-item-icons">
                <button class="kanban-item-view" title="Open record" on:click=on_view>
                    "👁"
                </button>
                <span class="kanban-drag-handle" title="Drag to move">"⠿"</span>
            </div>
        </div>
    }
}
