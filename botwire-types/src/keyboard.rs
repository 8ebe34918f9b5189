use botwire_json::{Encode, ObjectWriter};

/// One button of an inline keyboard.
///
/// The API requires exactly one of the optional action fields to be
/// set; the model carries whatever the constructors put there and
/// leaves enforcement to the server.
///
/// <https://core.telegram.org/bots/api#inlinekeyboardbutton>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineKeyboardButton {
    /// Label shown on the button.
    pub text: String,
    /// HTTP or `tg://` URL opened when the button is pressed.
    pub url: Option<String>,
    /// Data sent back in a callback query when the button is pressed,
    /// 1-64 bytes.
    pub callback_data: Option<String>,
    /// Prompts the user to pick a chat and insert an inline query there.
    pub switch_inline_query: Option<String>,
    /// Inserts an inline query into the current chat's input field.
    pub switch_inline_query_current_chat: Option<String>,
}

impl InlineKeyboardButton {
    /// A button opening `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// A button sending `data` back as a callback query.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            ..Self::default()
        }
    }
}

impl Encode for InlineKeyboardButton {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("text", &self.text);
        obj.field_opt("url", &self.url);
        obj.field_opt("callback_data", &self.callback_data);
        obj.field_opt("switch_inline_query", &self.switch_inline_query);
        obj.field_opt(
            "switch_inline_query_current_chat",
            &self.switch_inline_query_current_chat,
        );
        obj.finish();
    }
}

/// An inline keyboard: rows of buttons attached to a message.
///
/// On the wire this travels inside a request as one JSON-encoded string
/// under the `reply_markup` parameter, not as a nested form field.
///
/// <https://core.telegram.org/bots/api#inlinekeyboardmarkup>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineKeyboardMarkup {
    /// Button rows, top to bottom.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// A keyboard holding a single button.
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self {
            inline_keyboard: vec![vec![button]],
        }
    }

    /// A keyboard from prebuilt rows.
    pub fn from_rows(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }
}

impl Encode for InlineKeyboardMarkup {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("inline_keyboard", &self.inline_keyboard);
        obj.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_button_encoding() {
        let markup = InlineKeyboardMarkup::single_button(InlineKeyboardButton::callback(
            "Subscribe", "sub:42",
        ));
        assert_eq!(
            markup.to_json(),
            r#"{"inline_keyboard":[[{"text":"Subscribe","callback_data":"sub:42"}]]}"#
        );
    }

    #[test]
    fn rows_keep_their_order() {
        let markup = InlineKeyboardMarkup::from_rows(vec![
            vec![
                InlineKeyboardButton::url("Open", "https://example.com/a"),
                InlineKeyboardButton::url("Docs", "https://example.com/b"),
            ],
            vec![InlineKeyboardButton::callback("Dismiss", "x")],
        ]);
        let text = markup.to_json();
        assert!(text.starts_with(r#"{"inline_keyboard":[[{"text":"Open""#));
        assert!(text.contains(r#"[{"text":"Dismiss","callback_data":"x"}]"#));
    }
}
