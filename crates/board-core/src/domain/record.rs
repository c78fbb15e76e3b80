//! Record snapshot handed over by the host record store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the viewed table, already filtered and sorted by the host.
///
/// `values` holds the raw per-field values; their shapes are heterogeneous
/// (scalar, labeled-option object, multi-select list, user reference) and
/// are only interpreted by the extractor layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    /// Default display label computed by the host
    pub label: String,
    #[serde(default)]
    pub values: Map<String, Value>,
    /// Creator attribute, when the host exposes it on the record
    #[serde(default)]
    pub created_by: Option<Value>,
}

impl Record {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            values: Map::new(),
            created_by: None,
        }
    }

    /// Raw value of a field, `None` when absent or JSON null
    pub fn value(&self, field_name: &str) -> Option<&Value> {
        self.values.get(field_name).filter(|v| !v.is_null())
    }

    /// Builder-style helper used heavily by tests
    pub fn with_value(mut self, field_name: impl Into<String>, value: Value) -> Self {
        self.values.insert(field_name.into(), value);
        self
    }
}
