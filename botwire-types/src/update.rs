use botwire_json::{Decode, DecodeError, Encode, ObjectWriter, Value, expect_object};

use crate::message::Message;
use crate::user::User;

/// An incoming callback query from an inline keyboard button.
///
/// <https://core.telegram.org/bots/api#callbackquery>
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackQuery {
    /// Unique query identifier.
    pub id: String,
    /// Who pressed the button.
    pub from: User,
    /// Message the button was attached to, when it is still available.
    pub message: Option<Message>,
    /// Identifier of the inline-mode message carrying the button.
    pub inline_message_id: Option<String>,
    /// Global identifier of the chat the button was sent to.
    pub chat_instance: String,
    /// Data associated with the button.
    pub data: Option<String>,
    /// Short name of a Game to be returned.
    pub game_short_name: Option<String>,
}

impl Encode for CallbackQuery {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("id", &self.id);
        obj.field("from", &self.from);
        obj.field_opt("message", &self.message);
        obj.field_opt("inline_message_id", &self.inline_message_id);
        obj.field("chat_instance", &self.chat_instance);
        obj.field_opt("data", &self.data);
        obj.field_opt("game_short_name", &self.game_short_name);
        obj.finish();
    }
}

impl Decode for CallbackQuery {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            id: map.required("id")?,
            from: map.required("from")?,
            message: map.optional("message")?,
            inline_message_id: map.optional("inline_message_id")?,
            chat_instance: map.required("chat_instance")?,
            data: map.optional("data")?,
            game_short_name: map.optional("game_short_name")?,
        })
    }
}

/// One incoming update from `getUpdates`.
///
/// At most one payload field is populated per update by API contract;
/// the model does not enforce that and simply carries whichever fields
/// arrive. Payload kinds nobody models yet are preserved as raw
/// [`Value`] subtrees so callers can still route or forward them.
///
/// <https://core.telegram.org/bots/api#update>
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// Monotonically increasing identifier, wire name `update_id`.
    pub id: i64,
    /// New incoming message.
    pub message: Option<Message>,
    /// New version of an edited message.
    pub edited_message: Option<Message>,
    /// New incoming channel post.
    pub channel_post: Option<Message>,
    /// New version of an edited channel post.
    pub edited_channel_post: Option<Message>,
    /// New message from a connected business account.
    pub business_message: Option<Message>,
    /// New version of an edited business message.
    pub edited_business_message: Option<Message>,
    /// New incoming callback query.
    pub callback_query: Option<CallbackQuery>,
    /// Business connection change, unmodeled.
    pub business_connection: Option<Value>,
    /// Deleted business messages, unmodeled.
    pub deleted_business_messages: Option<Value>,
    /// Message reaction change, unmodeled.
    pub message_reaction: Option<Value>,
    /// Anonymous reaction count change, unmodeled.
    pub message_reaction_count: Option<Value>,
    /// New inline query, unmodeled.
    pub inline_query: Option<Value>,
    /// Chosen inline result, unmodeled.
    pub chosen_inline_result: Option<Value>,
    /// New shipping query, unmodeled.
    pub shipping_query: Option<Value>,
    /// New pre-checkout query, unmodeled.
    pub pre_checkout_query: Option<Value>,
    /// Paid media purchase, unmodeled.
    pub purchased_paid_media: Option<Value>,
    /// Poll state change, unmodeled.
    pub poll: Option<Value>,
    /// Poll answer change, unmodeled.
    pub poll_answer: Option<Value>,
    /// The bot's own chat member status change, unmodeled.
    pub my_chat_member: Option<Value>,
    /// A chat member status change, unmodeled.
    pub chat_member: Option<Value>,
    /// New chat join request, unmodeled.
    pub chat_join_request: Option<Value>,
    /// Chat boost change, unmodeled.
    pub chat_boost: Option<Value>,
    /// Removed chat boost, unmodeled.
    pub removed_chat_boost: Option<Value>,
}

impl Encode for Update {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("update_id", &self.id);
        obj.field_opt("message", &self.message);
        obj.field_opt("edited_message", &self.edited_message);
        obj.field_opt("channel_post", &self.channel_post);
        obj.field_opt("edited_channel_post", &self.edited_channel_post);
        obj.field_opt("business_message", &self.business_message);
        obj.field_opt("edited_business_message", &self.edited_business_message);
        obj.field_opt("callback_query", &self.callback_query);
        obj.field_opt("business_connection", &self.business_connection);
        obj.field_opt("deleted_business_messages", &self.deleted_business_messages);
        obj.field_opt("message_reaction", &self.message_reaction);
        obj.field_opt("message_reaction_count", &self.message_reaction_count);
        obj.field_opt("inline_query", &self.inline_query);
        obj.field_opt("chosen_inline_result", &self.chosen_inline_result);
        obj.field_opt("shipping_query", &self.shipping_query);
        obj.field_opt("pre_checkout_query", &self.pre_checkout_query);
        obj.field_opt("purchased_paid_media", &self.purchased_paid_media);
        obj.field_opt("poll", &self.poll);
        obj.field_opt("poll_answer", &self.poll_answer);
        obj.field_opt("my_chat_member", &self.my_chat_member);
        obj.field_opt("chat_member", &self.chat_member);
        obj.field_opt("chat_join_request", &self.chat_join_request);
        obj.field_opt("chat_boost", &self.chat_boost);
        obj.field_opt("removed_chat_boost", &self.removed_chat_boost);
        obj.finish();
    }
}

impl Decode for Update {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            id: map.required("update_id")?,
            message: map.optional("message")?,
            edited_message: map.optional("edited_message")?,
            channel_post: map.optional("channel_post")?,
            edited_channel_post: map.optional("edited_channel_post")?,
            business_message: map.optional("business_message")?,
            edited_business_message: map.optional("edited_business_message")?,
            callback_query: map.optional("callback_query")?,
            business_connection: map.optional("business_connection")?,
            deleted_business_messages: map.optional("deleted_business_messages")?,
            message_reaction: map.optional("message_reaction")?,
            message_reaction_count: map.optional("message_reaction_count")?,
            inline_query: map.optional("inline_query")?,
            chosen_inline_result: map.optional("chosen_inline_result")?,
            shipping_query: map.optional("shipping_query")?,
            pre_checkout_query: map.optional("pre_checkout_query")?,
            purchased_paid_media: map.optional("purchased_paid_media")?,
            poll: map.optional("poll")?,
            poll_answer: map.optional("poll_answer")?,
            my_chat_member: map.optional("my_chat_member")?,
            chat_member: map.optional("chat_member")?,
            chat_join_request: map.optional("chat_join_request")?,
            chat_boost: map.optional("chat_boost")?,
            removed_chat_boost: map.optional("removed_chat_boost")?,
        })
    }
}
