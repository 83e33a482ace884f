use crate::{
    guild::Permissions,
    id::{
        marker::{GenericMarker, RoleMarker, UserMarker},
        Id,
    },
};
use serde::{Deserialize, Serialize};

/// Permission grant and deny pair attached to a channel.
///
/// `allow` and `deny` are disjoint by convention only. A value that sets the
/// same bit in both is representable and decodes without error; the
/// validation pass reports it.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PermissionOverwrite {
    pub allow: Permissions,
    pub deny: Permissions,
    /// Role or member ID, depending on [`kind`].
    ///
    /// [`kind`]: Self::kind
    pub id: Id<GenericMarker>,
    #[serde(rename = "type")]
    pub kind: PermissionOverwriteType,
}

impl PermissionOverwrite {
    /// ID of the role this overwrite targets, if it targets a role.
    pub const fn role_id(&self) -> Option<Id<RoleMarker>> {
        match self.kind {
            PermissionOverwriteType::Role => Some(self.id.cast()),
            _ => None,
        }
    }

    /// ID of the member this overwrite targets, if it targets a member.
    pub const fn member_id(&self) -> Option<Id<UserMarker>> {
        match self.kind {
            PermissionOverwriteType::Member => Some(self.id.cast()),
            _ => None,
        }
    }

    /// Bits that are both allowed and denied.
    pub fn conflicting(&self) -> Permissions {
        self.allow & self.deny
    }
}

/// Type of a permission overwrite target.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum PermissionOverwriteType {
    /// Permission overwrite targets an individual role.
    Role,
    /// Permission overwrite targets an individual member.
    Member,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for PermissionOverwriteType {
    fn from(value: i64) -> Self {
        match value {
            0 => PermissionOverwriteType::Role,
            1 => PermissionOverwriteType::Member,
            unknown => PermissionOverwriteType::Unknown(unknown),
        }
    }
}

impl From<PermissionOverwriteType> for i64 {
    fn from(value: PermissionOverwriteType) -> Self {
        match value {
            PermissionOverwriteType::Role => 0,
            PermissionOverwriteType::Member => 1,
            PermissionOverwriteType::Unknown(unknown) => unknown,
        }
    }
}
