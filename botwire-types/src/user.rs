use botwire_json::{Decode, DecodeError, Encode, ObjectWriter, Value, expect_object};

/// A Telegram user or bot.
///
/// <https://core.telegram.org/bots/api#user>
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Unique identifier.
    pub id: i64,
    /// `true` if this account is a bot.
    pub is_bot: bool,
    /// First name of the user or bot.
    pub first_name: String,
    /// Last name, if set.
    pub last_name: Option<String>,
    /// Username, without the leading `@`.
    pub username: Option<String>,
    /// IETF language tag of the user's client language.
    pub language_code: Option<String>,
    /// `true` if the user has Telegram Premium.
    pub is_premium: Option<bool>,
    /// `true` if the user added the bot to their attachment menu.
    pub added_to_attachment_menu: Option<bool>,
    /// `true` if the bot can be invited to groups. `getMe` only.
    pub can_join_groups: Option<bool>,
    /// `true` if privacy mode is disabled for the bot. `getMe` only.
    pub can_read_all_group_messages: Option<bool>,
    /// `true` if the bot supports inline queries. `getMe` only.
    pub supports_inline_queries: Option<bool>,
    /// `true` if the bot can be connected to a Business account. `getMe` only.
    pub can_connect_to_business: Option<bool>,
    /// `true` if the bot has a main Web App. `getMe` only.
    pub has_main_web_app: Option<bool>,
}

impl Encode for User {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("id", &self.id);
        obj.field("is_bot", &self.is_bot);
        obj.field("first_name", &self.first_name);
        obj.field_opt("last_name", &self.last_name);
        obj.field_opt("username", &self.username);
        obj.field_opt("language_code", &self.language_code);
        obj.field_opt("is_premium", &self.is_premium);
        obj.field_opt("added_to_attachment_menu", &self.added_to_attachment_menu);
        obj.field_opt("can_join_groups", &self.can_join_groups);
        obj.field_opt(
            "can_read_all_group_messages",
            &self.can_read_all_group_messages,
        );
        obj.field_opt("supports_inline_queries", &self.supports_inline_queries);
        obj.field_opt("can_connect_to_business", &self.can_connect_to_business);
        obj.field_opt("has_main_web_app", &self.has_main_web_app);
        obj.finish();
    }
}

impl Decode for User {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            id: map.required("id")?,
            is_bot: map.required("is_bot")?,
            first_name: map.required("first_name")?,
            last_name: map.optional("last_name")?,
            username: map.optional("username")?,
            language_code: map.optional("language_code")?,
            is_premium: map.optional("is_premium")?,
            added_to_attachment_menu: map.optional("added_to_attachment_menu")?,
            can_join_groups: map.optional("can_join_groups")?,
            can_read_all_group_messages: map.optional("can_read_all_group_messages")?,
            supports_inline_queries: map.optional("supports_inline_queries")?,
            can_connect_to_business: map.optional("can_connect_to_business")?,
            has_main_web_app: map.optional("has_main_web_app")?,
        })
    }
}
