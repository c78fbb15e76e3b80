//! View Configuration
//!
//! Field mappings persisted by the host's view-option form. Read once per
//! board render, never written here.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::FieldId;

/// Field mappings for one board view.
///
/// Only `category` is required; every other mapping silently degrades when
/// absent. Ids arrive as JSON numbers or strings depending on how the host
/// serialized the form, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Select field whose options become the board's columns
    #[serde(default, deserialize_with = "lenient_field_id")]
    pub category: Option<FieldId>,
    /// Field shown as the card title; default record label when unset
    #[serde(default, deserialize_with = "lenient_field_id", alias = "title_column")]
    pub title: Option<FieldId>,
    /// Field shown as detail text under the title
    #[serde(default, deserialize_with = "lenient_field_id", alias = "detail_column")]
    pub detail: Option<FieldId>,
    /// Field holding the user reference the card avatar is resolved from
    #[serde(default, deserialize_with = "lenient_field_id", alias = "avatar_column")]
    pub avatar: Option<FieldId>,
    /// Select field whose options become editable tag chips
    #[serde(default, deserialize_with = "lenient_field_id", alias = "tag_column")]
    pub tag: Option<FieldId>,
}

impl BoardConfig {
    /// Parse from the host's persisted view-options JSON.
    /// Malformed options degrade to an empty config, which the builder
    /// then reports as a missing category mapping.
    pub fn from_options(options: &Value) -> Self {
        serde_json::from_value(options.clone()).unwrap_or_else(|e| {
            log::error!("kanban view: unreadable view options ({e}), using empty config");
            Self::default()
        })
    }
}

/// Accept a field id as number, numeric string, or null
fn lenient_field_id<'de, D>(deserializer: D) -> Result<Option<FieldId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().map(|v| v as FieldId),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let config = BoardConfig::from_options(&json!({
            "category": 7,
            "title_column": "12",
            "tag_column": null,
        }));
        assert_eq!(config.category, Some(7));
        assert_eq!(config.title, Some(12));
        assert_eq!(config.tag, None);
        assert_eq!(config.detail, None);
    }

    #[test]
    fn malformed_options_degrade_to_empty_config() {
        let config = BoardConfig::from_options(&json!(["not", "an", "object"]));
        assert_eq!(config, BoardConfig::default());
    }
}
