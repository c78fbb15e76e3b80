//! Frontend Models
//!
//! Wire mirrors of the board builder's JSON snapshot, plus the plugin's
//! display options. Field shapes match the `board-core` output exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One option of the tag field, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

/// Avatar data resolved server-side, one per card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub avatar: String,
}

/// One card (matches builder output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub detail: String,
    pub data_id: i64,
    pub table_name: String,
    pub update_url: String,
    /// Full record mirror, source of the optional badge data
    #[serde(default)]
    pub record: Value,
    pub avatar_info: AvatarInfo,
    #[serde(default)]
    pub tag_field: Option<String>,
    #[serde(default)]
    pub tag_options: Vec<SelectOption>,
    #[serde(default)]
    pub current_tags: Vec<String>,
    #[serde(default)]
    pub allow_multiple_tags: bool,
    #[serde(default)]
    pub raw_tag_value: Option<Value>,
}

impl BoardItem {
    /// Label of a tag option key; unknown keys render nothing
    pub fn tag_label(&self, key: &str) -> Option<&str> {
        self.tag_options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }

    /// Raw field value out of the mirrored record
    pub fn record_value(&self, field_name: &str) -> Option<&Value> {
        self.record
            .get("values")?
            .get(field_name)
            .filter(|v| !v.is_null())
    }

    /// Scalar record field as text, for badge rendering
    pub fn record_text(&self, field_name: &str) -> Option<String> {
        match self.record_value(field_name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One column (matches builder output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub field_name: String,
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub drag_to: Vec<String>,
    #[serde(default)]
    pub items: Vec<BoardItem>,
}

impl Column {
    /// Whether cards from this column may be dropped onto `column_id`
    pub fn accepts_drop_to(&self, column_id: &str) -> bool {
        self.drag_to.iter().any(|id| id == column_id)
    }
}

/// Display toggles for card enrichment; absent keys mean "feature off"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub show_priority_bar: bool,
    #[serde(default)]
    pub show_assignee: bool,
    #[serde(default)]
    pub show_due_date: bool,
    #[serde(default)]
    pub show_attachment_icon: bool,
    #[serde(default)]
    pub card_custom_fields: Vec<String>,
    #[serde(default)]
    pub priority_color_high: Option<String>,
    #[serde(default)]
    pub priority_color_medium: Option<String>,
    #[serde(default)]
    pub priority_color_low: Option<String>,
}

impl PluginOptions {
    /// Bar color for a priority value, with the stock palette as default
    pub fn priority_color(&self, priority: &str) -> String {
        let custom = match priority.to_lowercase().as_str() {
            "high" => self.priority_color_high.as_deref().or(Some("#ff4d4f")),
            "medium" => self.priority_color_medium.as_deref().or(Some("#ffa940")),
            "low" => self.priority_color_low.as_deref().or(Some("#52c41a")),
            _ => None,
        };
        custom.unwrap_or("#bfbfbf").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_with_record(record: Value) -> BoardItem {
        BoardItem {
            id: "item-id-1".into(),
            title: "t".into(),
            detail: String::new(),
            data_id: 1,
            table_name: "tasks".into(),
            update_url: "https://x/update".into(),
            record,
            avatar_info: AvatarInfo {
                name: "User".into(),
                email: String::new(),
                avatar: "https://x/images/avatar-placeholder.png".into(),
            },
            tag_field: None,
            tag_options: Vec::new(),
            current_tags: Vec::new(),
            allow_multiple_tags: true,
            raw_tag_value: None,
        }
    }

    #[test]
    fn record_text_reads_scalars_from_the_mirror() {
        let item =
            item_with_record(json!({"values": {"priority": "high", "points": 3, "done": false}}));
        assert_eq!(item.record_text("priority").as_deref(), Some("high"));
        assert_eq!(item.record_text("points").as_deref(), Some("3"));
        assert_eq!(item.record_text("done"), None);
        assert_eq!(item.record_text("missing"), None);
    }

    #[test]
    fn priority_colors_prefer_configured_overrides() {
        let options = PluginOptions {
            priority_color_high: Some("#123456".into()),
            ..Default::default()
        };
        assert_eq!(options.priority_color("HIGH"), "#123456");
        assert_eq!(options.priority_color("medium"), "#ffa940");
        assert_eq!(options.priority_color("unknown"), "#bfbfbf");
    }

    #[test]
    fn absent_option_keys_default_to_off() {
        let options: PluginOptions = serde_json::from_value(json!({})).unwrap();
        assert!(!options.show_priority_bar);
        assert!(options.card_custom_fields.is_empty());
    }
}
