//! Application Context
//!
//! Per-page-session constants and handles provided via the Leptos
//! Context API.

use leptos::prelude::*;

use crate::api::UpdateQueue;
use crate::components::ToastHandle;
use crate::models::PluginOptions;

/// App-wide context shared by all components
#[derive(Clone)]
pub struct AppContext {
    /// CSRF token issued by the host, sent with every update call
    pub csrf_token: String,
    /// Admin base URL, for the record detail view
    pub base_url: String,
    /// Display toggles for card enrichment
    pub options: PluginOptions,
    /// Transient notifications
    pub toasts: ToastHandle,
    /// Per-card serialized update calls
    pub updates: UpdateQueue,
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
