//! Page Bootstrap
//!
//! The host embeds everything the renderer needs as hidden inputs:
//! `#kanban_board_data` (column snapshot), `#kanban_plugin_options`
//! (display toggles), `#kanban_csrf_token` and `#kanban_base_url`.
//! Parse failures degrade to an empty board / default options with a
//! console error, never a panic.

use wasm_bindgen::JsCast;

use crate::log::console_error;
use crate::models::{Column, PluginOptions};

/// Everything read out of the page at startup
#[derive(Clone, Debug, Default)]
pub struct PageData {
    pub columns: Vec<Column>,
    pub options: PluginOptions,
    pub csrf_token: String,
    pub base_url: String,
}

/// Read and parse the embedded page inputs
pub fn read_page_data() -> PageData {
    PageData {
        columns: parse_columns(&hidden_input_value("kanban_board_data").unwrap_or_default()),
        options: parse_options(&hidden_input_value("kanban_plugin_options").unwrap_or_default()),
        csrf_token: hidden_input_value("kanban_csrf_token").unwrap_or_default(),
        base_url: hidden_input_value("kanban_base_url").unwrap_or_default(),
    }
}

fn hidden_input_value(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    element
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Parse the board snapshot; malformed JSON yields an empty board
pub fn parse_columns(raw: &str) -> Vec<Column> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(columns) => columns,
        Err(e) => {
            console_error(&format!("[KANBAN] unreadable board data: {e}"));
            Vec::new()
        }
    }
}

/// Parse the display toggles; malformed JSON yields every feature off
pub fn parse_options(raw: &str) -> PluginOptions {
    if raw.trim().is_empty() {
        return PluginOptions::default();
    }
    match serde_json::from_str(raw) {
        Ok(options) => options,
        Err(e) => {
            console_error(&format!("[KANBAN] unreadable plugin options: {e}"));
            PluginOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_JSON: &str = r#"[{
        "id": "board-id-1",
        "field_name": "status",
        "key": "1",
        "title": "Todo",
        "drag_to": ["board-id-1", "board-id-2"],
        "items": [{
            "id": "item-id-10",
            "title": "Task A",
            "detail": "first task",
            "data_id": 10,
            "table_name": "tasks",
            "update_url": "https://admin.example.com/plugins/kanban/update",
            "record": {"values": {"status": "1"}},
            "avatar_info": {"name": "Dana", "email": "", "avatar": "https://x/u.png"},
            "tag_field": "labels",
            "tag_options": [{"key": "urgent", "label": "Urgent"}],
            "current_tags": ["urgent"],
            "allow_multiple_tags": true,
            "raw_tag_value": "urgent"
        }]
    }]"#;

    #[test]
    fn board_snapshot_round_trips_from_page_json() {
        let columns = parse_columns(BOARD_JSON);
        assert_eq!(columns.len(), 1);
        let item = &columns[0].items[0];
        assert_eq!(item.data_id, 10);
        assert_eq!(item.current_tags, vec!["urgent"]);
        assert_eq!(item.tag_label("urgent"), Some("Urgent"));
        assert!(columns[0].accepts_drop_to("board-id-2"));
    }

    #[test]
    fn malformed_board_data_degrades_to_empty() {
        assert!(parse_columns("{not json").is_empty());
        assert!(parse_columns("").is_empty());
    }

    #[test]
    fn options_parse_with_partial_keys() {
        let options = parse_options(r#"{"show_priority_bar": true, "card_custom_fields": ["points"]}"#);
        assert!(options.show_priority_bar);
        assert!(!options.show_due_date);
        assert_eq!(options.card_custom_fields, vec!["points"]);
    }
}
