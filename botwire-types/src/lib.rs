//! Typed records for the Telegram Bot API.
//!
//! Entities implement the [`botwire_json`] trait pair by walking their
//! own fields, so each type's wire shape lives next to the type. Three
//! details are worth knowing:
//!
//! * wire names that clash with Rust (`type`) or bake the record name
//!   into the field (`message_id`, `update_id`) map to `kind` and `id`;
//! * the self-referential `pinned_message` chain decodes through a
//!   depth counter capped at [`MAX_PINNED_DEPTH`]; deeper pins are
//!   dropped, never errors;
//! * [`Update`] carries unmodeled payload kinds as raw
//!   [`botwire_json::Value`] passthrough fields.
//!
//! The [`Response`] envelope and [`ApiError`] cover the `{ok, result,
//! error_code, description}` wrapper every call comes back in.

#![deny(unsafe_code)]

mod chat;
mod keyboard;
mod message;
mod response;
mod update;
mod user;

pub use chat::Chat;
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup};
pub use message::{MAX_PINNED_DEPTH, Message, MessageEntity};
pub use response::{ApiError, Response, ResponseParameters};
pub use update::{CallbackQuery, Update};
pub use user::User;
