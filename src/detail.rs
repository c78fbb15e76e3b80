//! Record Detail View
//!
//! The per-card eye icon opens the host's record detail view in an
//! overlay. The host may expose a modal opener on `window`; without one
//! the detail page opens in a new tab.

use wasm_bindgen::{JsCast, JsValue};

use crate::log::console_error;

/// Name of the optional modal-opener function the host puts on `window`
const MODAL_OPENER: &str = "showRecordModal";

/// Detail-view URL for one record, `None` when the card lacks the
/// required identifiers (a rendering defect, not a user error)
pub fn detail_url(base_url: &str, table_name: &str, data_id: i64) -> Option<String> {
    if base_url.is_empty() || table_name.is_empty() || data_id <= 0 {
        return None;
    }
    Some(format!(
        "{}/data/{}/{}?modal=1",
        base_url.trim_end_matches('/'),
        table_name,
        data_id
    ))
}

/// Open the detail view for one card; logs and no-ops on missing linkage
pub fn open_detail_view(base_url: &str, table_name: &str, data_id: i64) {
    let Some(url) = detail_url(base_url, table_name, data_id) else {
        console_error(&format!(
            "[KANBAN] detail view needs table name and record id, got '{table_name}'/{data_id}"
        ));
        return;
    };

    let Some(window) = web_sys::window() else { return };

    // Prefer the host's overlay when it is installed
    if let Ok(opener) = js_sys::Reflect::get(&window, &JsValue::from_str(MODAL_OPENER)) {
        if let Some(function) = opener.dyn_ref::<js_sys::Function>() {
            if function.call1(&JsValue::NULL, &JsValue::from_str(&url)).is_ok() {
                return;
            }
        }
    }
    let _ = window.open_with_url_and_target(&url, "_blank");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url_joins_table_and_record() {
        assert_eq!(
            detail_url("https://admin.example.com/admin/", "tasks", 7).as_deref(),
            Some("https://admin.example.com/admin/data/tasks/7?modal=1")
        );
    }

    #[test]
    fn missing_linkage_yields_no_url() {
        assert_eq!(detail_url("", "tasks", 7), None);
        assert_eq!(detail_url("https://x", "", 7), None);
        assert_eq!(detail_url("https://x", "tasks", 0), None);
    }
}
