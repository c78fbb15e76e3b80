//! Domain Layer
//!
//! Snapshot types handed over by the host platform.

mod field;
mod record;
mod user;

pub use field::{FieldDef, FieldId, SelectOption};
pub use record::Record;
pub use user::UserProfile;
