//! Markers for various resource types, such as channels or users.
//!
//! Markers themselves perform no logical action, and are only used to
//! ensure that IDs of incorrect types aren't used. If IDs were only 64-bit
//! integers then a role's ID may be erroneously used in the place of where
//! a user's ID is required; by using markers it can be ensured that only an
//! ID with a [`RoleMarker`] can be used where a role's ID is required.

/// Marker for application IDs.
///
/// Types such as [`Message::application_id`] or [`GroupDmChannel`] use this
/// ID marker.
///
/// [`GroupDmChannel`]: crate::channel::GroupDmChannel
/// [`Message::application_id`]: crate::channel::message::Message::application_id
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for attachment IDs.
///
/// Types such as [`Attachment`] use this ID marker.
///
/// [`Attachment`]: crate::channel::Attachment
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

/// Marker for channel IDs.
///
/// Types such as [`Channel`] or [`ChannelMention`] use this ID marker.
///
/// [`Channel`]: crate::channel::Channel
/// [`ChannelMention`]: crate::channel::message::ChannelMention
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for emoji IDs.
///
/// Types such as [`PartialEmoji`] or [`DefaultReaction`] use this ID marker.
///
/// [`DefaultReaction`]: crate::channel::forum::DefaultReaction
/// [`PartialEmoji`]: crate::channel::message::PartialEmoji
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for generic IDs.
///
/// Types such as [`PermissionOverwrite`] use this ID marker, since the ID
/// may refer to either a role or a member depending on the overwrite type.
///
/// [`PermissionOverwrite`]: crate::channel::PermissionOverwrite
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
///
/// Types such as [`GuildFields`] or [`MessageReference`] use this ID marker.
///
/// [`GuildFields`]: crate::channel::GuildFields
/// [`MessageReference`]: crate::channel::message::MessageReference
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for interaction IDs.
///
/// Types such as [`MessageInteractionMetadata`] use this ID marker.
///
/// [`MessageInteractionMetadata`]: crate::channel::message::MessageInteractionMetadata
#[derive(Debug)]
#[non_exhaustive]
pub struct InteractionMarker;

/// Marker for message IDs.
///
/// Types such as [`Message`] or [`MessageReference`] use this ID marker.
///
/// [`Message`]: crate::channel::message::Message
/// [`MessageReference`]: crate::channel::message::MessageReference
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for role IDs.
///
/// Types such as [`Message::mention_roles`] or [`SelectDefaultValue`] use
/// this ID marker.
///
/// [`Message::mention_roles`]: crate::channel::message::Message::mention_roles
/// [`SelectDefaultValue`]: crate::channel::message::component::SelectDefaultValue
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for role subscription listing IDs.
///
/// Types such as [`RoleSubscriptionData`] use this ID marker.
///
/// [`RoleSubscriptionData`]: crate::channel::message::RoleSubscriptionData
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleSubscriptionSkuMarker;

/// Marker for SKU IDs.
///
/// Premium [`Button`]s reference a SKU through this marker.
///
/// [`Button`]: crate::channel::message::component::Button
#[derive(Debug)]
#[non_exhaustive]
pub struct SkuMarker;

/// Marker for sticker IDs.
///
/// Types such as [`MessageStickerItem`] use this ID marker.
///
/// [`MessageStickerItem`]: crate::channel::message::MessageStickerItem
#[derive(Debug)]
#[non_exhaustive]
pub struct StickerMarker;

/// Marker for forum tag IDs.
///
/// Types such as [`ForumTag`] use this ID marker.
///
/// [`ForumTag`]: crate::channel::forum::ForumTag
#[derive(Debug)]
#[non_exhaustive]
pub struct TagMarker;

/// Marker for user IDs.
///
/// Types such as [`User`] or [`ThreadMember`] use this ID marker.
///
/// [`ThreadMember`]: crate::channel::thread::ThreadMember
/// [`User`]: crate::user::User
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;

/// Marker for webhook IDs.
///
/// Types such as [`Message::webhook_id`] use this ID marker.
///
/// [`Message::webhook_id`]: crate::channel::message::Message::webhook_id
#[derive(Debug)]
#[non_exhaustive]
pub struct WebhookMarker;
