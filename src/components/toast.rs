//! Toast Notifications
//!
//! Transient success/error messages for update round trips.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay
const DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for raising toasts from anywhere in the tree
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastHandle {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.set_toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast stack, mounted once next to the board
#[component]
pub fn Toasts(handle: ToastHandle) -> impl IntoView {
    view! {
        <div class="kanban-toasts">
            <For
                each=move || handle.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "kanban-toast kanban-toast-success",
                        ToastKind::Error => "kanban-toast kanban-toast-error",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
