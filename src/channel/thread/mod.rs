//! Thread-specific shapes carried by thread channels.

mod auto_archive_duration;
mod member;
mod metadata;

pub use self::{
    auto_archive_duration::AutoArchiveDuration,
    member::{ThreadMember, ThreadMemberFlags},
    metadata::ThreadMetadata,
};
