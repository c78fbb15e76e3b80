//! Board Core
//!
//! Server-side board builder for the kanban plugin view. Reads the view's
//! field mappings, pages through the host's filtered record list and emits
//! the ordered column/card snapshot the client renderer consumes. The host
//! platform (record store, field catalog, user directory) sits behind the
//! traits in [`host`].

pub mod avatar;
pub mod board;
pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod host;
pub mod update;


pub use board::{AvatarInfo, BoardItem, Column};
pub use builder::BoardBuilder;
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use host::{FieldCatalog, HostContext, RecordSource, RecordWriter, UserDirectory};
pub use update::{apply_field_update, FieldUpdateRequest};
