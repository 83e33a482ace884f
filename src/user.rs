//! Users, as embedded in messages, recipients lists and interactions.

use crate::id::{marker::UserMarker, Id};
use serde::{Deserialize, Serialize};

/// A user of the platform.
///
/// Only the fields that travel inside channel and message payloads are
/// modeled; account-private fields such as `email` are not.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    /// Avatar hash.
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub bot: bool,
    /// Legacy four digit tag, `"0"` for users on the unique username system.
    pub discriminator: String,
    /// Display name, if one is set.
    #[serde(default)]
    pub global_name: Option<String>,
    pub id: Id<UserMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    pub username: String,
}

impl User {
    /// Name shown in the client: the global name, falling back to the
    /// username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}
