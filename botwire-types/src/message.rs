use botwire_json::{Decode, DecodeError, Encode, ObjectWriter, Value, expect_object};

use crate::chat::Chat;
use crate::user::User;

/// Decoding follows `pinned_message` chains at most this many levels
/// down; anything deeper is dropped without failing the message.
///
/// Real chains are one level long (a pin service message holding the
/// pinned message), but the wire format permits arbitrary depth and a
/// hostile or broken server must not be able to exhaust the stack.
pub const MAX_PINNED_DEPTH: u8 = 3;

/// One special entity inside a message text: a mention, hashtag, link,
/// formatting span and so on.
///
/// <https://core.telegram.org/bots/api#messageentity>
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntity {
    /// Entity kind, wire name `type`: `mention`, `hashtag`, `bold`,
    /// `code`, `text_link`, `text_mention`, ...
    pub kind: String,
    /// Offset into the text, in UTF-16 code units.
    pub offset: i64,
    /// Length of the entity, in UTF-16 code units.
    pub length: i64,
    /// Target URL, for `text_link` entities.
    pub url: Option<String>,
    /// Mentioned user, for `text_mention` entities.
    pub user: Option<User>,
    /// Programming language, for `pre` entities.
    pub language: Option<String>,
    /// Custom emoji identifier, for `custom_emoji` entities.
    pub custom_emoji_id: Option<String>,
}

impl Encode for MessageEntity {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("type", &self.kind);
        obj.field("offset", &self.offset);
        obj.field("length", &self.length);
        obj.field_opt("url", &self.url);
        obj.field_opt("user", &self.user);
        obj.field_opt("language", &self.language);
        obj.field_opt("custom_emoji_id", &self.custom_emoji_id);
        obj.finish();
    }
}

impl Decode for MessageEntity {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            kind: map.required("type")?,
            offset: map.required("offset")?,
            length: map.required("length")?,
            url: map.optional("url")?,
            user: map.optional("user")?,
            language: map.optional("language")?,
            custom_emoji_id: map.optional("custom_emoji_id")?,
        })
    }
}

/// A message in a chat.
///
/// <https://core.telegram.org/bots/api#message>
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Unique identifier inside the chat, wire name `message_id`.
    pub id: i64,
    /// Sender; absent for channel posts and some service messages.
    pub from: Option<User>,
    /// Unix time the message was sent.
    pub date: i64,
    /// The chat the message belongs to.
    pub chat: Chat,
    /// Text, for text messages.
    pub text: Option<String>,
    /// Special entities appearing in [`Message::text`], in order.
    pub entities: Option<Vec<MessageEntity>>,
    /// The pinned message, for pin service messages. Self-referential,
    /// so it is boxed; chains deeper than [`MAX_PINNED_DEPTH`] are
    /// truncated while decoding.
    pub pinned_message: Option<Box<Message>>,
}

impl Encode for Message {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("message_id", &self.id);
        obj.field_opt("from", &self.from);
        obj.field("date", &self.date);
        obj.field("chat", &self.chat);
        obj.field_opt("text", &self.text);
        obj.field_opt("entities", &self.entities);
        obj.field_opt("pinned_message", &self.pinned_message);
        obj.finish();
    }
}

impl Decode for Message {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Self::decode_at_depth(value, 0)
    }
}

impl Message {
    /// Decodes one message, following `pinned_message` only while
    /// `depth` is below [`MAX_PINNED_DEPTH`].
    ///
    /// Only the pin chain threads the counter. Every other place a
    /// message appears (update payloads, `CallbackQuery::message`)
    /// starts over at depth zero via [`Decode::decode`].
    fn decode_at_depth(value: &Value, depth: u8) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        let pinned_message = match map.get("pinned_message") {
            Some(node) if !node.is_null() && depth < MAX_PINNED_DEPTH => Some(
                Self::decode_at_depth(node, depth + 1)
                    .map(Box::new)
                    .map_err(|e| DecodeError::in_field("pinned_message", e))?,
            ),
            // at the ceiling the field is dropped, the message still decodes
            _ => None,
        };
        Ok(Self {
            id: map.required("message_id")?,
            from: map.optional("from")?,
            date: map.required("date")?,
            chat: map.required("chat")?,
            text: map.optional("text")?,
            entities: map.optional("entities")?,
            pinned_message,
        })
    }
}
