//! Avatar Resolution
//!
//! Resolves one `AvatarInfo` per card from whatever the mapped avatar
//! field holds. Resolvers are tried in a fixed order and the first match
//! wins; the chain ends in a generic placeholder, so resolution never
//! fails.

use serde_json::{Map, Value};

use crate::board::AvatarInfo;
use crate::domain::Record;
use crate::extract::scalar_text;
use crate::host::{HostContext, UserDirectory};

/// Resolve the avatar for one card.
///
/// Order: numeric user reference, user-like object, object nested under
/// `created_user`, bare scalar display name, the record's creator
/// attribute, generic placeholder.
pub async fn resolve_avatar(
    field_value: Option<&Value>,
    record: &Record,
    users: &dyn UserDirectory,
    host: &HostContext,
) -> AvatarInfo {
    if let Some(value) = field_value {
        if let Some(info) = from_user_reference(value, users, host).await {
            return info;
        }
        if let Some(info) = value.as_object().and_then(|o| from_user_object(o, host)) {
            return info;
        }
        if let Some(info) = from_created_user_wrapper(value, host) {
            return info;
        }
        if let Some(info) = from_scalar_name(value, host) {
            return info;
        }
    }
    if let Some(creator) = record.created_by.as_ref() {
        if let Some(obj) = creator.as_object() {
            return from_user_fields(obj, host);
        }
    }
    placeholder(host)
}

/// (1) Numeric user id, looked up in the host's user directory.
/// An id that resolves to no user falls through to the next resolver.
async fn from_user_reference(
    value: &Value,
    users: &dyn UserDirectory,
    host: &HostContext,
) -> Option<AvatarInfo> {
    let user_id = numeric_id(value)?;
    let Some(user) = users.find_user(user_id).await else {
        log::debug!("kanban view: no user found for avatar reference {user_id}");
        return None;
    };
    let avatar = match user.avatar_file.as_deref() {
        Some(file) if !file.is_empty() => host.file_url(file),
        _ => host.default_avatar_url(),
    };
    Some(AvatarInfo {
        name: user.name,
        email: user.email,
        avatar,
    })
}

/// (2) Embedded user-like object, recognized by an `email` key
fn from_user_object(obj: &Map<String, Value>, host: &HostContext) -> Option<AvatarInfo> {
    if !obj.contains_key("email") {
        return None;
    }
    Some(from_user_fields(obj, host))
}

/// (3) User object nested under a `created_user` key
fn from_created_user_wrapper(value: &Value, host: &HostContext) -> Option<AvatarInfo> {
    value
        .as_object()?
        .get("created_user")?
        .as_object()
        .map(|o| from_user_fields(o, host))
}

/// Pull name/email/avatar out of a user-shaped object, absolutizing
/// relative avatar references per the host's file convention
fn from_user_fields(obj: &Map<String, Value>, host: &HostContext) -> AvatarInfo {
    let avatar = if let Some(url) = non_empty_text(obj.get("avatar_url")) {
        host.absolutize(&url)
    } else if let Some(file) = non_empty_text(obj.get("avatar")) {
        host.file_url(&file)
    } else {
        host.default_avatar_url()
    };
    AvatarInfo {
        name: non_empty_text(obj.get("name")).unwrap_or_default(),
        email: non_empty_text(obj.get("email")).unwrap_or_default(),
        avatar,
    }
}

/// (4) Bare scalar treated as a display name with the placeholder image
fn from_scalar_name(value: &Value, host: &HostContext) -> Option<AvatarInfo> {
    let name = scalar_text(value).filter(|s| !s.is_empty())?;
    Some(AvatarInfo {
        name,
        email: String::new(),
        avatar: host.default_avatar_url(),
    })
}

/// (6) Generic placeholder when nothing else resolved
fn placeholder(host: &HostContext) -> AvatarInfo {
    AvatarInfo {
        name: "User".to_string(),
        email: String::new(),
        avatar: host.default_avatar_url(),
    }
}

fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    value.and_then(scalar_text).filter(|s| !s.is_empty())
}
