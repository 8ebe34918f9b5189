//! # botwire — Telegram Bot API bindings
//!
//! `botwire` talks to the Telegram Bot HTTP API through typed records.
//! It consists of three focused sub-crates wired together here for
//! convenience:
//!
//! | Sub-crate        | Role                                               |
//! |------------------|----------------------------------------------------|
//! | `botwire-json`   | JSON tree, parser, and the `Encode`/`Decode` pair  |
//! | `botwire-types`  | Bot API entities with bounded recursive decoding   |
//! | `botwire-client` | Method calls, parameter flattening, transport trait|
//!
//! ## Quick start
//!
//! ```
//! use botwire::{Decode, SendMessage, ToParams, Update};
//!
//! let update = Update::from_json(
//!     r#"{"update_id":7,"message":{"message_id":1,"date":0,"chat":{"id":99,"type":"private"},"text":"/start"}}"#,
//! )?;
//! let incoming = update.message.as_ref().and_then(|m| m.text.as_deref());
//! assert_eq!(incoming, Some("/start"));
//!
//! let request = SendMessage::new(99_i64, "Welcome!");
//! assert_eq!(request.to_params().get("chat_id"), Some("99"));
//! # Ok::<_, botwire::DecodeError>(())
//! ```
//!
//! To go over the network, implement [`Transport`] for your HTTP stack and
//! hand it to [`Bot`]; see the `botwire-client` docs for a worked example.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`botwire_json`] — the JSON tree, the bounded parser, and the
/// `Encode`/`Decode` trait pair.
pub use botwire_json as json;

/// Re-export of [`botwire_types`] — users, chats, messages, updates, keyboards,
/// and the response envelope.
pub use botwire_types as types;

/// Re-export of [`botwire_client`] — method records, parameter maps, the
/// transport trait, and the memoizing [`Bot`] front end.
pub use botwire_client as client;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use botwire_json::{Decode, DecodeError, Encode, Map, ParseError, Value};

pub use botwire_types::{
    ApiError, CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message,
    MessageEntity, Response, Update, User,
};

pub use botwire_client::{
    AnswerCallbackQuery, Bot, CallError, ChatId, GetMe, GetUpdates, Method, Params, ParseMode,
    SendMessage, ToParams, Transport,
};
