//! Field metadata as exposed by the host's column catalog.

use serde::{Deserialize, Serialize};

/// Host-assigned identifier of a custom field
pub type FieldId = u32;

/// One option of a single/multi-select field, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Raw stored value
    pub key: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Resolved definition of a mapped field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub id: FieldId,
    /// Storage name, the key under `Record::values`
    pub name: String,
    /// Human-facing name shown in configuration forms
    pub view_name: String,
    /// Select options; empty for non-select fields
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl FieldDef {
    /// Label for an option key, if the key is known
    pub fn option_label(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }
}
