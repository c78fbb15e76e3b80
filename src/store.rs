//! Board Store
//!
//! The single long-lived mutable copy of the board snapshot, backed by
//! Leptos reactive_stores. Every user-initiated mutation goes through the
//! patch operations here, so the DOM and the mirror never diverge.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BoardItem, Column};

/// Client-side board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Ordered columns, as delivered by the builder
    pub columns: Vec<Column>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Pure patch operations
// ========================
// Kept free of signals so they are testable on the host target.

/// Move a card between columns. Returns false when the card or the target
/// column is missing, which indicates a rendering defect, not user error.
pub fn move_item(columns: &mut [Column], card_id: &str, from_column: &str, to_column: &str) -> bool {
    let Some(from_index) = columns.iter().position(|c| c.id == from_column) else {
        return false;
    };
    let Some(to_index) = columns.iter().position(|c| c.id == to_column) else {
        return false;
    };
    let Some(item_index) = columns[from_index].items.iter().position(|i| i.id == card_id) else {
        return false;
    };
    let item = columns[from_index].items.remove(item_index);
    columns[to_index].items.push(item);
    true
}

/// Replace a card's tag selection, keeping `raw_tag_value` in step so a
/// later re-render derives the same chips.
pub fn set_item_tags(columns: &mut [Column], data_id: i64, tags: &[String]) -> bool {
    let mut patched = false;
    for column in columns.iter_mut() {
        for item in column.items.iter_mut().filter(|i| i.data_id == data_id) {
            item.current_tags = tags.to_vec();
            item.raw_tag_value = Some(serde_json::json!(tags));
            patched = true;
        }
    }
    patched
}

/// Find a card anywhere on the board
pub fn find_item<'a>(columns: &'a [Column], card_id: &str) -> Option<&'a BoardItem> {
    columns
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|i| i.id == card_id)
}

// ========================
// Store helpers
// ========================

pub fn store_move_item(store: &BoardStore, card_id: &str, from_column: &str, to_column: &str) -> bool {
    move_item(&mut store.columns().write(), card_id, from_column, to_column)
}

pub fn store_set_item_tags(store: &BoardStore, data_id: i64, tags: &[String]) -> bool {
    set_item_tags(&mut store.columns().write(), data_id, tags)
}

pub fn store_find_item(store: &BoardStore, card_id: &str) -> Option<BoardItem> {
    find_item(&store.columns().read(), card_id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvatarInfo, SelectOption};

    fn card(id: &str, data_id: i64) -> BoardItem {
        BoardItem {
            id: id.into(),
            title: id.into(),
            detail: String::new(),
            data_id,
            table_name: "tasks".into(),
            update_url: "https://x/update".into(),
            record: serde_json::Value::Null,
            avatar_info: AvatarInfo {
                name: "User".into(),
                email: String::new(),
                avatar: String::new(),
            },
            tag_field: Some("labels".into()),
            tag_options: vec![
                SelectOption {
                    key: "urgent".into(),
                    label: "Urgent".into(),
                },
                SelectOption {
                    key: "blocked".into(),
                    label: "Blocked".into(),
                },
            ],
            current_tags: Vec::new(),
            allow_multiple_tags: true,
            raw_tag_value: None,
        }
    }

    fn board() -> Vec<Column> {
        vec![
            Column {
                id: "board-id-1".into(),
                field_name: "status".into(),
                key: "1".into(),
                title: "Todo".into(),
                drag_to: vec!["board-id-1".into(), "board-id-2".into()],
                items: vec![card("item-id-1", 1), card("item-id-2", 2)],
            },
            Column {
                id: "board-id-2".into(),
                field_name: "status".into(),
                key: "2".into(),
                title: "Done".into(),
                drag_to: vec!["board-id-1".into(), "board-id-2".into()],
                items: Vec::new(),
            },
        ]
    }

    #[test]
    fn move_item_reassigns_the_card_between_columns() {
        let mut columns = board();
        assert!(move_item(&mut columns, "item-id-1", "board-id-1", "board-id-2"));
        assert_eq!(columns[0].items.len(), 1);
        assert_eq!(columns[1].items.len(), 1);
        assert_eq!(columns[1].items[0].id, "item-id-1");
    }

    #[test]
    fn move_item_with_unknown_card_or_column_is_a_noop() {
        let mut columns = board();
        assert!(!move_item(&mut columns, "item-id-9", "board-id-1", "board-id-2"));
        assert!(!move_item(&mut columns, "item-id-1", "board-id-1", "board-id-9"));
        assert_eq!(columns[0].items.len(), 2);
        assert!(columns[1].items.is_empty());
    }

    #[test]
    fn set_item_tags_patches_selection_and_raw_value() {
        let mut columns = board();
        let tags = vec!["urgent".to_string(), "blocked".to_string()];
        assert!(set_item_tags(&mut columns, 2, &tags));

        let item = find_item(&columns, "item-id-2").unwrap();
        assert_eq!(item.current_tags, tags);
        assert_eq!(item.raw_tag_value, Some(serde_json::json!(["urgent", "blocked"])));
        // the sibling card is untouched
        assert!(find_item(&columns, "item-id-1").unwrap().current_tags.is_empty());
    }

    #[test]
    fn set_item_tags_for_unknown_record_reports_false() {
        let mut columns = board();
        assert!(!set_item_tags(&mut columns, 99, &["urgent".to_string()]));
    }
}
