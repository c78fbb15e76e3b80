//! Field Update Endpoint
//!
//! Server half of the generic "set field values" call the client posts on
//! drop and tag edits. The host wires this into its routing and CSRF
//! layer; this module only validates and delegates to the record store.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{BoardError, BoardResult};
use crate::host::RecordWriter;

/// Body of the update call, minus the host-verified CSRF token
#[derive(Debug, Clone, Deserialize)]
pub struct FieldUpdateRequest {
    pub id: i64,
    pub table_name: String,
    /// Field storage name → new value
    pub value: Map<String, Value>,
}

/// Apply one field update and return the updated record JSON.
pub async fn apply_field_update(
    writer: &dyn RecordWriter,
    request: &FieldUpdateRequest,
) -> BoardResult<Value> {
    if request.value.is_empty() {
        return Err(BoardError::InvalidRequest(format!(
            "no field values for record {} of {}",
            request.id, request.table_name
        )));
    }
    log::info!(
        "kanban view: updating record {} of {} ({} field(s))",
        request.id,
        request.table_name,
        request.value.len()
    );
    writer.set_field_values(request.id, &request.value).await
}
