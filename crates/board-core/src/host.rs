//! Host Platform Seams
//!
//! Abstract interfaces for everything the board builder needs from the
//! surrounding admin platform. Implementations live host-side; tests use
//! in-memory fakes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{FieldDef, FieldId, Record, UserProfile};
use crate::error::BoardResult;

/// Chunked access to the viewed table's records.
///
/// The host applies the view's filter and sort configuration before
/// handing records out; the builder only pages through the result.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch up to `limit` records starting at `offset`.
    /// A chunk shorter than `limit` marks the end of the result set.
    async fn fetch_chunk(&self, offset: usize, limit: usize) -> BoardResult<Vec<Record>>;
}

/// Lookup of custom-field metadata by id
#[async_trait]
pub trait FieldCatalog: Send + Sync {
    /// Resolve a configured field id; `None` when the field was deleted
    /// or the id never existed.
    async fn field(&self, id: FieldId) -> Option<FieldDef>;
}

/// Lookup of login users referenced by user-typed field values
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, id: i64) -> Option<UserProfile>;
}

/// Write access for the generic field-update endpoint
#[async_trait]
pub trait RecordWriter: Send + Sync {
    /// Set the given field values on one record and return the updated
    /// record representation as JSON.
    async fn set_field_values(&self, id: i64, values: &Map<String, Value>) -> BoardResult<Value>;
}

/// Path of the placeholder image used when no avatar can be resolved
pub const DEFAULT_AVATAR_PATH: &str = "images/avatar-placeholder.png";

/// URL conventions and per-view constants of the hosting platform
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Absolute base URL of the admin area, no trailing slash required
    pub base_url: String,
    /// Storage name of the viewed table
    pub table_name: String,
    /// Endpoint the client posts field updates to
    pub update_url: String,
}

impl HostContext {
    pub fn new(
        base_url: impl Into<String>,
        table_name: impl Into<String>,
        update_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            table_name: table_name.into(),
            update_url: update_url.into(),
        }
    }

    /// Join a path onto the admin base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of a stored file, per the host's file-serving convention
    pub fn file_url(&self, file_id: &str) -> String {
        self.url(&format!("files/{file_id}"))
    }

    /// URL of the generic avatar placeholder image
    pub fn default_avatar_url(&self) -> String {
        self.url(DEFAULT_AVATAR_PATH)
    }

    /// Absolutize a root-relative URL; absolute URLs pass through unchanged
    pub fn absolutize(&self, url: &str) -> String {
        if url.starts_with("http") || !url.starts_with('/') {
            url.to_string()
        } else {
            self.url(url)
        }
    }
}
