//! User profile as returned by the host's user directory.

use serde::{Deserialize, Serialize};

/// Minimal login-user projection needed for avatar resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// File identifier of the stored avatar image, if the user has one
    #[serde(default)]
    pub avatar_file: Option<String>,
}
