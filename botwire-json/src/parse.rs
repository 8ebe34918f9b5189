//! Recursive-descent JSON text parser producing [`Value`] trees.
//!
//! The grammar is plain [RFC 8259] JSON with two local rules on top:
//!
//! * Numbers without fraction or exponent that fit an `i64` become
//!   [`Value::Int`]; everything else becomes [`Value::Float`].
//! * Duplicate object keys keep the last value, in the key's first
//!   position.
//!
//! Errors carry the byte offset into the input where parsing stopped.
//!
//! [RFC 8259]: https://www.rfc-editor.org/rfc/rfc8259

use std::fmt;

use crate::value::{Map, Value};

/// Containers may nest at most this many levels deep.
///
/// The parser is recursive, so unbounded nesting would overflow the
/// stack long before memory runs out. Real Bot API payloads stay in
/// single digits.
pub const MAX_DEPTH: usize = 128;

/// Parses a complete JSON document from text.
///
/// The whole input must be consumed; anything after the first value
/// (other than whitespace) is an error.
///
/// ```
/// use botwire_json::{parse, Value};
///
/// let value = parse(r#"{"ok": true, "result": []}"#)?;
/// assert_eq!(value.get("ok").and_then(Value::as_bool), Some(true));
/// # Ok::<_, botwire_json::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser {
        text,
        bytes: text.as_bytes(),
        pos: 0,
    };
    parser.skip_ws();
    let value = parser.parse_value(0)?;
    parser.skip_ws();
    if parser.pos != parser.bytes.len() {
        return Err(ParseError::TrailingCharacters { offset: parser.pos });
    }
    Ok(value)
}

/// Parses a complete JSON document from raw bytes.
///
/// The input must be valid UTF-8; transports hand us `Vec<u8>` bodies,
/// so the check lives here rather than at every call site.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    parse(text)
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// The reason a JSON document failed to parse.
///
/// Offsets are byte positions into the input handed to [`parse`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The input ended in the middle of a value.
    UnexpectedEof,
    /// A byte that no production allows at this position.
    Unexpected {
        /// The offending byte.
        byte: u8,
        /// Where it sits in the input.
        offset: usize,
    },
    /// A number token that does not follow the JSON grammar.
    InvalidNumber {
        /// Start of the number token.
        offset: usize,
    },
    /// A backslash followed by something other than `"\/bfnrtu`.
    InvalidEscape {
        /// Position of the backslash.
        offset: usize,
    },
    /// A `\uXXXX` escape with bad hex digits or a lone surrogate.
    InvalidUnicode {
        /// Position of the backslash opening the escape.
        offset: usize,
    },
    /// A raw control character inside a string literal.
    ControlCharacter {
        /// The offending byte.
        byte: u8,
        /// Where it sits in the input.
        offset: usize,
    },
    /// Non-whitespace input left over after the first value.
    TrailingCharacters {
        /// Start of the leftover input.
        offset: usize,
    },
    /// Containers nested deeper than [`MAX_DEPTH`].
    TooDeep {
        /// Position of the container that crossed the limit.
        offset: usize,
    },
    /// The input is not valid UTF-8.
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::Unexpected { byte, offset } => {
                write!(f, "unexpected byte 0x{byte:02x} at offset {offset}")
            }
            Self::InvalidNumber { offset } => write!(f, "malformed number at offset {offset}"),
            Self::InvalidEscape { offset } => {
                write!(f, "invalid escape sequence at offset {offset}")
            }
            Self::InvalidUnicode { offset } => {
                write!(f, "invalid unicode escape at offset {offset}")
            }
            Self::ControlCharacter { byte, offset } => write!(
                f,
                "unescaped control character 0x{byte:02x} in string at offset {offset}"
            ),
            Self::TrailingCharacters { offset } => {
                write!(f, "trailing characters after value at offset {offset}")
            }
            Self::TooDeep { offset } => write!(
                f,
                "containers nested deeper than {MAX_DEPTH} levels at offset {offset}"
            ),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "input is not valid utf-8 past byte {valid_up_to}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ─── Parser ───────────────────────────────────────────────────────────────────

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<u8, ParseError> {
        let byte = self.peek().ok_or(ParseError::UnexpectedEof)?;
        self.pos += 1;
        Ok(byte)
    }

    fn skip_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, want: u8) -> Result<(), ParseError> {
        match self.next()? {
            byte if byte == want => Ok(()),
            byte => Err(ParseError::Unexpected {
                byte,
                offset: self.pos - 1,
            }),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        match self.peek().ok_or(ParseError::UnexpectedEof)? {
            b'{' | b'[' if depth >= MAX_DEPTH => Err(ParseError::TooDeep { offset: self.pos }),
            b'{' => self.parse_object(depth).map(Value::Object),
            b'[' => self.parse_array(depth).map(Value::Array),
            b'"' => self.parse_string().map(Value::Str),
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b'n' => self.parse_literal("null", Value::Null),
            b'-' | b'0'..=b'9' => self.parse_number(),
            byte => Err(ParseError::Unexpected {
                byte,
                offset: self.pos,
            }),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Map, ParseError> {
        self.pos += 1; // past '{'
        let mut map = Map::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(map);
        }
        loop {
            self.skip_ws();
            match self.peek() {
                Some(b'"') => {}
                Some(byte) => {
                    return Err(ParseError::Unexpected {
                        byte,
                        offset: self.pos,
                    });
                }
                None => return Err(ParseError::UnexpectedEof),
            }
            let key = self.parse_string()?;
            self.skip_ws();
            self.expect(b':')?;
            self.skip_ws();
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);
            self.skip_ws();
            match self.next()? {
                b',' => continue,
                b'}' => return Ok(map),
                byte => {
                    return Err(ParseError::Unexpected {
                        byte,
                        offset: self.pos - 1,
                    });
                }
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Vec<Value>, ParseError> {
        self.pos += 1; // past '['
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            self.skip_ws();
            items.push(self.parse_value(depth + 1)?);
            self.skip_ws();
            match self.next()? {
                b',' => continue,
                b']' => return Ok(items),
                byte => {
                    return Err(ParseError::Unexpected {
                        byte,
                        offset: self.pos - 1,
                    });
                }
            }
        }
    }

    /// Parses a string literal starting at the opening quote.
    ///
    /// Unescaped spans are copied out of the input in whole runs; the
    /// run boundaries fall only on ASCII bytes, never inside a
    /// multi-byte character, so the slices stay on char boundaries.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.pos += 1; // past '"'
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            let byte = match self.bytes.get(self.pos) {
                Some(byte) => *byte,
                None => return Err(ParseError::UnexpectedEof),
            };
            match byte {
                b'"' => {
                    out.push_str(&self.text[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.text[run..self.pos]);
                    self.pos += 1;
                    self.parse_escape(&mut out)?;
                    run = self.pos;
                }
                0x00..=0x1F => {
                    return Err(ParseError::ControlCharacter {
                        byte,
                        offset: self.pos,
                    });
                }
                _ => self.pos += 1,
            }
        }
    }

    /// Parses the escape body right after a consumed backslash.
    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let offset = self.pos - 1; // the backslash
        match self.next()? {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let unit = self.parse_hex4()?;
                let ch = match unit {
                    // high surrogate, must pair with a low one
                    0xD800..=0xDBFF => {
                        if self.next()? != b'\\' || self.next()? != b'u' {
                            return Err(ParseError::InvalidUnicode { offset });
                        }
                        let low = self.parse_hex4()?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(ParseError::InvalidUnicode { offset });
                        }
                        let code = 0x10000
                            + ((u32::from(unit) - 0xD800) << 10)
                            + (u32::from(low) - 0xDC00);
                        char::from_u32(code).ok_or(ParseError::InvalidUnicode { offset })?
                    }
                    0xDC00..=0xDFFF => return Err(ParseError::InvalidUnicode { offset }),
                    _ => char::from_u32(u32::from(unit))
                        .ok_or(ParseError::InvalidUnicode { offset })?,
                };
                out.push(ch);
            }
            _ => return Err(ParseError::InvalidEscape { offset }),
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        let mut unit = 0u16;
        for _ in 0..4 {
            let offset = self.pos;
            let digit = match self.next()? {
                byte @ b'0'..=b'9' => byte - b'0',
                byte @ b'a'..=b'f' => byte - b'a' + 10,
                byte @ b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(ParseError::InvalidUnicode { offset }),
            };
            unit = unit << 4 | u16::from(digit);
        }
        Ok(unit)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.pos += 1;
                }
            }
            _ => return Err(ParseError::InvalidNumber { offset: start }),
        }
        let mut integral = true;
        if self.peek() == Some(b'.') {
            integral = false;
            self.pos += 1;
            self.digits(start)?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            integral = false;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.digits(start)?;
        }
        let text = &self.text[start..self.pos];
        if integral {
            // overflowing i64 falls through to f64
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Int(n));
            }
        }
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ParseError::InvalidNumber { offset: start })
    }

    fn digits(&mut self, start: usize) -> Result<(), ParseError> {
        let mut any = false;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
            any = true;
        }
        if any {
            Ok(())
        } else {
            Err(ParseError::InvalidNumber { offset: start })
        }
    }

    fn parse_literal(&mut self, word: &str, value: Value) -> Result<Value, ParseError> {
        let offset = self.pos;
        let end = offset + word.len();
        if self.bytes.len() >= end && &self.bytes[offset..end] == word.as_bytes() {
            self.pos = end;
            Ok(value)
        } else {
            Err(ParseError::Unexpected {
                byte: self.bytes[offset],
                offset,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse("true"), Ok(Value::Bool(true)));
        assert_eq!(parse(" false "), Ok(Value::Bool(false)));
        assert!(matches!(parse("nul"), Err(ParseError::Unexpected { .. })));
    }

    #[test]
    fn integer_or_float() {
        assert_eq!(parse("0"), Ok(Value::Int(0)));
        assert_eq!(parse("-42"), Ok(Value::Int(-42)));
        assert_eq!(parse("9223372036854775807"), Ok(Value::Int(i64::MAX)));
        assert_eq!(parse("1.5"), Ok(Value::Float(1.5)));
        assert_eq!(parse("1e3"), Ok(Value::Float(1000.0)));
        assert_eq!(parse("-2.5e-1"), Ok(Value::Float(-0.25)));
        // too large for i64, falls back to float
        assert_eq!(
            parse("9223372036854775808"),
            Ok(Value::Float(9223372036854775808.0))
        );
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(parse("-"), Err(ParseError::InvalidNumber { offset: 0 }));
        assert_eq!(parse("1."), Err(ParseError::InvalidNumber { offset: 0 }));
        assert_eq!(parse("2e"), Err(ParseError::InvalidNumber { offset: 0 }));
        // leading zeros are not a number; "1" is left over
        assert!(parse("01").is_err());
    }

    #[test]
    fn strings_and_escapes() {
        assert_eq!(parse(r#""""#), Ok(Value::Str(String::new())));
        assert_eq!(parse(r#""héllo мир""#), Ok(Value::Str("héllo мир".into())));
        assert_eq!(
            parse(r#""a\"b\\c\/d\n\t\r\b\f""#),
            Ok(Value::Str("a\"b\\c/d\n\t\r\u{8}\u{c}".into()))
        );
        assert_eq!(parse(r#""ж""#), Ok(Value::Str("ж".into())));
        // surrogate pair for U+1F600
        assert_eq!(parse(r#""😀""#), Ok(Value::Str("😀".into())));
    }

    #[test]
    fn bad_strings() {
        assert_eq!(
            parse(r#""\q""#),
            Err(ParseError::InvalidEscape { offset: 1 })
        );
        assert_eq!(
            parse(r#""\uZZZZ""#),
            Err(ParseError::InvalidUnicode { offset: 3 })
        );
        // lone high surrogate
        assert_eq!(
            parse(r#""\ud83d""#),
            Err(ParseError::InvalidUnicode { offset: 1 })
        );
        // lone low surrogate
        assert_eq!(
            parse(r#""\ude00""#),
            Err(ParseError::InvalidUnicode { offset: 1 })
        );
        assert_eq!(
            parse("\"a\nb\""),
            Err(ParseError::ControlCharacter {
                byte: b'\n',
                offset: 2
            })
        );
        assert_eq!(parse("\"open"), Err(ParseError::UnexpectedEof));
    }

    #[test]
    fn arrays_and_objects() {
        assert_eq!(parse("[]"), Ok(Value::Array(Vec::new())));
        assert_eq!(
            parse("[1, 2, 3]"),
            Ok(Value::Array(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3)
            ]))
        );
        let value = parse(r#"{"a": 1, "b": {"c": [true]}}"#).unwrap();
        assert_eq!(value.get("a"), Some(&Value::Int(1)));
        assert_eq!(
            value.get("b").and_then(|b| b.get("c")),
            Some(&Value::Array(vec![Value::Bool(true)]))
        );
    }

    #[test]
    fn duplicate_keys_last_wins_in_place() {
        let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, [("a", &Value::Int(3)), ("b", &Value::Int(2))]);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(parse("{invalid json").is_err());
        assert!(matches!(
            parse("{\"a\": 1,}"),
            Err(ParseError::Unexpected { byte: b'}', .. })
        ));
        assert_eq!(parse("[1, 2"), Err(ParseError::UnexpectedEof));
        assert_eq!(
            parse("true false"),
            Err(ParseError::TrailingCharacters { offset: 5 })
        );
        assert_eq!(parse(""), Err(ParseError::UnexpectedEof));
    }

    #[test]
    fn nesting_limit() {
        let mut deep = String::new();
        for _ in 0..MAX_DEPTH {
            deep.push('[');
        }
        deep.push('1');
        for _ in 0..MAX_DEPTH {
            deep.push(']');
        }
        assert!(parse(&deep).is_ok());

        let mut too_deep = String::new();
        for _ in 0..=MAX_DEPTH {
            too_deep.push('[');
        }
        assert!(matches!(parse(&too_deep), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn invalid_utf8_input() {
        assert_eq!(
            parse_bytes(b"\"ab\xff\""),
            Err(ParseError::InvalidUtf8 { valid_up_to: 3 })
        );
        assert_eq!(parse_bytes(b"[true]"), parse("[true]"));
    }
}
