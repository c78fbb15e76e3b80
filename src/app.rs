//! Application Root
//!
//! Reads the embedded page inputs once, seeds the board store and the
//! app context, and mounts the board with its toast stack.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::UpdateQueue;
use crate::bootstrap::read_page_data;
use crate::components::{Board, ToastHandle, Toasts};
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App() -> impl IntoView {
    let page = read_page_data();

    let store = Store::new(BoardState {
        columns: page.columns,
    });
    provide_context(store);

    let toasts = ToastHandle::new();
    provide_context(AppContext {
        csrf_token: page.csrf_token,
        base_url: page.base_url,
        options: page.options,
        toasts,
        updates: UpdateQueue::new(),
    });

    view! {
        <div class="kanban-app">
            <Board/>
            <Toasts handle=toasts/>
        </div>
    }
}
