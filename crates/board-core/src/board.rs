//! Board Output Model
//!
//! The JSON contract between the builder and the client renderer. Produced
//! once per page view as a disposable snapshot; the client keeps the only
//! long-lived mutable copy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::SelectOption;

/// Synthetic DOM-safe id of a column
pub fn column_id(key: &str) -> String {
    format!("board-id-{key}")
}

/// Synthetic DOM-safe id of a card
pub fn item_id(record_id: i64) -> String {
    format!("item-id-{record_id}")
}

/// Avatar data resolved once per card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Absolute image URL; the placeholder URL when nothing resolved
    pub avatar: String,
}

/// One card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    /// Synthetic id, `item-id-{data_id}`
    pub id: String,
    pub title: String,
    /// Detail text under the title; empty when unmapped or absent
    #[serde(default)]
    pub detail: String,
    /// Raw record identifier used in update calls
    pub data_id: i64,
    pub table_name: String,
    pub update_url: String,
    /// Full record mirror, kept client-side for re-renders
    pub record: Value,
    pub avatar_info: AvatarInfo,
    /// Storage name of the tag field, when one is mapped
    #[serde(default)]
    pub tag_field: Option<String>,
    /// Tag option set in catalog order; `current_tags` ⊆ its keys
    #[serde(default)]
    pub tag_options: Vec<SelectOption>,
    #[serde(default)]
    pub current_tags: Vec<String>,
    #[serde(default)]
    pub allow_multiple_tags: bool,
    /// Tag value exactly as stored, so the client can patch it in place
    #[serde(default)]
    pub raw_tag_value: Option<Value>,
}

/// One column of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Synthetic id, `board-id-{key}`
    pub id: String,
    /// Storage name of the category field
    pub field_name: String,
    /// Raw option key this column represents
    pub key: String,
    /// Option label shown as the column header
    pub title: String,
    /// Column ids cards from this column may be dropped onto
    pub drag_to: Vec<String>,
    #[serde(default)]
    pub items: Vec<BoardItem>,
}
