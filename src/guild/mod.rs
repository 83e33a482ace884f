//! Guild-scoped shapes shared by channels and messages.

mod permissions;

pub use self::permissions::Permissions;
