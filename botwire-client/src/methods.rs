//! Request records for the built-in method set.
//!
//! The set is deliberately tiny: enough to run a long-polling bot that
//! answers messages and button presses. Each record knows its wire
//! name, its response payload type and how to flatten itself; adding a
//! method elsewhere is one struct plus two short impls.

use botwire_json::Decode;
use botwire_types::{InlineKeyboardMarkup, Message, Update, User};

use crate::params::{Params, ToParam, ToParams};

/// A callable Bot API method.
pub trait Method: ToParams {
    /// Wire name of the method, e.g. `sendMessage`.
    const NAME: &'static str;

    /// Payload type inside a successful response envelope.
    type Response: Decode;
}

// ─── Request-side vocabulary ──────────────────────────────────────────────────

/// A chat target: numeric identifier or public username.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatId {
    /// Numeric chat identifier.
    Id(i64),
    /// Public username in the `@channelusername` form.
    Username(String),
}

impl ToParam for ChatId {
    fn to_param(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Username(name) => name.clone(),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::Username(name.to_owned())
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        Self::Username(name)
    }
}

/// Formatting applied to outgoing message text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseMode {
    /// HTML-style tags.
    Html,
    /// Legacy Markdown.
    Markdown,
    /// MarkdownV2.
    MarkdownV2,
}

impl ParseMode {
    /// The wire tag of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
        }
    }
}

impl ToParam for ParseMode {
    fn to_param(&self) -> String {
        self.as_str().to_owned()
    }
}

// ─── Methods ──────────────────────────────────────────────────────────────────

/// `getMe`: the bot's own [`User`] record.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetMe;

impl ToParams for GetMe {
    fn to_params(&self) -> Params {
        Params::new()
    }
}

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Response = User;
}

/// `getUpdates`: long-poll for incoming updates.
#[derive(Clone, Debug, Default)]
pub struct GetUpdates {
    /// Identifier of the first update to return. Pass the highest seen
    /// update id plus one to acknowledge everything before it.
    pub offset: Option<i64>,
    /// Maximum number of updates per response, 1-100.
    pub limit: Option<i64>,
    /// Long-polling timeout in seconds; 0 means short polling.
    pub timeout: Option<i64>,
    /// Update kinds to receive, e.g. `["message", "callback_query"]`.
    pub allowed_updates: Option<Vec<String>>,
}

impl ToParams for GetUpdates {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("offset", &self.offset);
        params.push_opt("limit", &self.limit);
        params.push_opt("timeout", &self.timeout);
        params.push_json_opt("allowed_updates", &self.allowed_updates);
        params
    }
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    type Response = Vec<Update>;
}

/// `sendMessage`: send a text message.
#[derive(Clone, Debug)]
pub struct SendMessage {
    /// Target chat.
    pub chat_id: ChatId,
    /// Message text, 1-4096 characters.
    pub text: String,
    /// Formatting applied to the text.
    pub parse_mode: Option<ParseMode>,
    /// Send silently; the user gets a notification without sound.
    pub disable_notification: Option<bool>,
    /// Identifier of the message this one replies to.
    pub reply_to_message_id: Option<i64>,
    /// Inline keyboard attached to the message. Travels as one
    /// JSON-encoded string parameter.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessage {
    /// A plain text message with everything else unset.
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl ToParams for SendMessage {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.push("chat_id", &self.chat_id);
        params.push("text", &self.text);
        params.push_opt("parse_mode", &self.parse_mode);
        params.push_opt("disable_notification", &self.disable_notification);
        params.push_opt("reply_to_message_id", &self.reply_to_message_id);
        params.push_json_opt("reply_markup", &self.reply_markup);
        params
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    type Response = Message;
}

/// `answerCallbackQuery`: acknowledge a pressed inline keyboard button
/// and dismiss its progress indicator.
#[derive(Clone, Debug, Default)]
pub struct AnswerCallbackQuery {
    /// Identifier of the query to answer.
    pub callback_query_id: String,
    /// Notification text shown to the user, up to 200 characters.
    pub text: Option<String>,
    /// Show an alert instead of a toast notification.
    pub show_alert: Option<bool>,
}

impl AnswerCallbackQuery {
    /// A bare acknowledgement of `callback_query_id`.
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
        }
    }
}

impl ToParams for AnswerCallbackQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.push("callback_query_id", &self.callback_query_id);
        params.push_opt("text", &self.text);
        params.push_opt("show_alert", &self.show_alert);
        params
    }
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";
    type Response = bool;
}
