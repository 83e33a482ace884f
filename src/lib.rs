//! Typed object model for the channels, messages and interactive components
//! of the Discord API.
//!
//! Values are decoded from and encoded to [`serde_json::Value`] through the
//! entry points in [`wire`]. Decoding is permissive: unknown channel types,
//! message types, component types, enum values and flag bits are kept and
//! written back unchanged. The platform's length limits and cross-field rules
//! are checked separately by [`validate`].
//!
//! ```
//! use discord_model::{channel::Channel, wire};
//! use serde_json::json;
//!
//! let channel = wire::decode_channel(&json!({
//!     "type": 0,
//!     "id": "123",
//!     "name": "general",
//!     "position": 0,
//! }))?;
//!
//! assert!(matches!(channel, Channel::GuildText(_)));
//! assert_eq!(channel.name(), Some("general"));
//! # Ok::<(), discord_model::wire::DecodeError>(())
//! ```

#![deny(rust_2018_idioms, unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod builders;
pub mod channel;
pub mod ext;
pub mod guild;
pub mod id;
pub mod user;
pub mod util;
#[cfg(feature = "validate")]
pub mod validate;
pub mod wire;
