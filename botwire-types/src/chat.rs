use botwire_json::{Decode, DecodeError, Encode, ObjectWriter, Value, expect_object};

/// A chat the bot can see: a private conversation, group, supergroup or
/// channel.
///
/// <https://core.telegram.org/bots/api#chat>
#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    /// Unique identifier.
    pub id: i64,
    /// Kind of chat, wire name `type`: one of `private`, `group`,
    /// `supergroup` or `channel`.
    pub kind: String,
    /// Title, for groups, supergroups and channels.
    pub title: Option<String>,
    /// Username, for private chats, supergroups and channels if set.
    pub username: Option<String>,
    /// First name of the other party in a private chat.
    pub first_name: Option<String>,
    /// Last name of the other party in a private chat.
    pub last_name: Option<String>,
}

impl Encode for Chat {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("id", &self.id);
        obj.field("type", &self.kind);
        obj.field_opt("title", &self.title);
        obj.field_opt("username", &self.username);
        obj.field_opt("first_name", &self.first_name);
        obj.field_opt("last_name", &self.last_name);
        obj.finish();
    }
}

impl Decode for Chat {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            id: map.required("id")?,
            kind: map.required("type")?,
            title: map.optional("title")?,
            username: map.optional("username")?,
            first_name: map.optional("first_name")?,
            last_name: map.optional("last_name")?,
        })
    }
}
