use botwire_json::{Decode, DecodeError, Encode, Value};
use botwire_types::{
    MAX_PINNED_DEPTH, Message, MessageEntity, Response, Update, User,
};

/// A message JSON literal with a pinned chain `depth` levels deep below
/// the top message. Innermost message has id 0.
fn pinned_chain(depth: usize) -> String {
    let mut message =
        String::from(r#"{"message_id":0,"date":1700000000,"chat":{"id":1,"type":"group"}}"#);
    for id in 1..=depth {
        message = format!(
            r#"{{"message_id":{id},"date":1700000000,"chat":{{"id":1,"type":"group"}},"pinned_message":{message}}}"#
        );
    }
    message
}

// ── Update decoding ───────────────────────────────────────────────────────────

#[test]
fn decodes_a_basic_update() {
    let text = r#"{"update_id":123456,"message":{"message_id":1,"date":1700000000,"chat":{"id":42,"type":"private"},"from":{"id":987654321,"is_bot":false,"first_name":"Alice"},"text":"Hello, bot!"}}"#;
    let update = Update::from_json(text).unwrap();
    assert_eq!(update.id, 123456);
    let message = update.message.expect("message payload");
    assert_eq!(message.text.as_deref(), Some("Hello, bot!"));
    assert_eq!(message.from.as_ref().map(|u| u.id), Some(987654321));
    assert_eq!(message.chat.id, 42);
    assert_eq!(message.chat.kind, "private");
    assert!(update.callback_query.is_none());
}

#[test]
fn opaque_payloads_pass_through_untouched() {
    let text = r#"{"update_id":9,"poll":{"id":"p1","question":"Lunch?","total_voter_count":3}}"#;
    let update = Update::from_json(text).unwrap();
    let poll = update.poll.as_ref().expect("poll payload");
    assert_eq!(poll.get("question").and_then(Value::as_str), Some("Lunch?"));
    assert!(update.message.is_none());

    // re-encoding keeps the subtree byte-compatible
    let again = Update::from_json(&update.to_json()).unwrap();
    assert_eq!(again, update);
}

#[test]
fn malformed_text_fails_before_field_matching() {
    assert!(matches!(
        Update::from_json("{invalid json"),
        Err(DecodeError::Syntax(_))
    ));
}

// ── Required fields ───────────────────────────────────────────────────────────

#[test]
fn user_without_id_is_missing_a_field() {
    let err = User::from_json(r#"{"is_bot": true, "first_name": "X"}"#).unwrap_err();
    assert_eq!(err, DecodeError::Missing { field: "id" });
}

#[test]
fn message_without_chat_fails() {
    let err = Message::from_json(r#"{"message_id":1,"date":0}"#).unwrap_err();
    assert_eq!(err, DecodeError::Missing { field: "chat" });
}

#[test]
fn nested_failures_name_the_path() {
    let err = Update::from_json(
        r#"{"update_id":1,"message":{"message_id":2,"date":3,"chat":{"id":"not-a-number","type":"group"}}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "message: chat: id: expected integer, found string"
    );
}

#[test]
fn entity_user_recurses_into_the_user_decoder() {
    let text = r#"{"type":"text_mention","offset":0,"length":4,"user":{"id":10,"is_bot":false,"first_name":"Ann"}}"#;
    let entity = MessageEntity::from_json(text).unwrap();
    assert_eq!(entity.kind, "text_mention");
    assert_eq!(entity.user.map(|u| u.id), Some(10));
}

// ── Pinned chains ─────────────────────────────────────────────────────────────

#[test]
fn pinned_chain_truncates_at_the_ceiling() {
    let top = Message::from_json(&pinned_chain(5)).unwrap();
    let mut levels = 0;
    let mut cursor = &top;
    while let Some(pinned) = cursor.pinned_message.as_deref() {
        levels += 1;
        cursor = pinned;
    }
    assert_eq!(levels, usize::from(MAX_PINNED_DEPTH));
    // the last kept message decoded normally, just without its pin
    assert_eq!(cursor.id, 2);
    assert_eq!(cursor.pinned_message, None);
}

#[test]
fn pinned_chain_at_the_ceiling_survives_whole() {
    let top = Message::from_json(&pinned_chain(3)).unwrap();
    let innermost = top
        .pinned_message
        .as_deref()
        .and_then(|m| m.pinned_message.as_deref())
        .and_then(|m| m.pinned_message.as_deref())
        .expect("three pinned levels");
    assert_eq!(innermost.id, 0);
    assert_eq!(innermost.pinned_message, None);
}

#[test]
fn callback_message_restarts_the_pin_counter() {
    let text = format!(
        r#"{{"update_id":7,"callback_query":{{"id":"cbq1","from":{{"id":5,"is_bot":false,"first_name":"Eva"}},"chat_instance":"-77","data":"go","message":{}}}}}"#,
        pinned_chain(3)
    );
    let update = Update::from_json(&text).unwrap();
    let query = update.callback_query.expect("callback query");
    assert_eq!(query.data.as_deref(), Some("go"));
    let message = query.message.expect("origin message");
    let innermost = message
        .pinned_message
        .as_deref()
        .and_then(|m| m.pinned_message.as_deref())
        .and_then(|m| m.pinned_message.as_deref());
    // the whole three-level chain survives, the counter started fresh
    assert!(innermost.is_some());
}

// ── Envelope ──────────────────────────────────────────────────────────────────

#[test]
fn error_envelope_keeps_the_description_verbatim() {
    let text = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
    let response = Response::<Value>::from_json(text).unwrap();
    assert!(!response.ok);
    assert_eq!(response.error_code, Some(400));
    let err = response.into_result().unwrap_err();
    assert_eq!(err.code, 400);
    assert_eq!(err.description, "Bad Request: chat not found");
    assert_eq!(err.to_string(), "API error 400: Bad Request: chat not found");
    assert_eq!(err.retry_after_seconds(), None);
}

#[test]
fn flood_wait_reports_retry_after() {
    let text = r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 14","parameters":{"retry_after":14}}"#;
    let err = Response::<Value>::from_json(text)
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(err.code, 429);
    assert_eq!(err.retry_after_seconds(), Some(14));
}

#[test]
fn ok_envelope_yields_the_typed_result() {
    let text = r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"botwire"}}"#;
    let user = Response::<User>::from_json(text)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(user.id, 1);
    assert!(user.is_bot);
}

// ── Round-trips ───────────────────────────────────────────────────────────────

#[test]
fn roundtrip_user_with_every_optional() {
    let user = User {
        id: 987654321,
        is_bot: false,
        first_name: "Alice".to_owned(),
        last_name: Some("Liddell".to_owned()),
        username: Some("alice".to_owned()),
        language_code: Some("en".to_owned()),
        is_premium: Some(true),
        added_to_attachment_menu: Some(false),
        can_join_groups: Some(true),
        can_read_all_group_messages: Some(false),
        supports_inline_queries: Some(true),
        can_connect_to_business: Some(false),
        has_main_web_app: Some(true),
    };
    assert_eq!(User::from_json(&user.to_json()).unwrap(), user);
}

#[test]
fn roundtrip_sparse_user_omits_absent_fields() {
    let user = User {
        id: 7,
        is_bot: true,
        first_name: "wire".to_owned(),
        last_name: None,
        username: None,
        language_code: None,
        is_premium: None,
        added_to_attachment_menu: None,
        can_join_groups: None,
        can_read_all_group_messages: None,
        supports_inline_queries: None,
        can_connect_to_business: None,
        has_main_web_app: None,
    };
    let text = user.to_json();
    assert_eq!(text, r#"{"id":7,"is_bot":true,"first_name":"wire"}"#);
    assert_eq!(User::from_json(&text).unwrap(), user);
}

#[test]
fn roundtrip_message_with_entities_and_pin() {
    let text = r#"{"message_id":31,"from":{"id":2,"is_bot":false,"first_name":"Bo"},"date":1700000100,"chat":{"id":-100123,"type":"supergroup","title":"lab"},"text":"see /docs","entities":[{"type":"bot_command","offset":4,"length":5}],"pinned_message":{"message_id":30,"date":1700000000,"chat":{"id":-100123,"type":"supergroup","title":"lab"},"text":"rules"}}"#;
    let message = Message::from_json(text).unwrap();
    assert_eq!(message.entities.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        message.pinned_message.as_deref().and_then(|m| m.text.as_deref()),
        Some("rules")
    );
    // decode(encode(x)) == x
    assert_eq!(Message::from_json(&message.to_json()).unwrap(), message);
}
