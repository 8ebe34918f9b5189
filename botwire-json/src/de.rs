//! Decoding of [`Value`] trees into typed records.
//!
//! A [`Decode`] impl checks the kind of the value it is handed and
//! pulls its fields out of the tree; nothing here is derived or
//! reflective. Absence is a field-level concern: an optional field is
//! read with [`Map::optional`], so `Option<T>` itself has no [`Decode`]
//! impl and a bare `null` in a required position reads as missing.
//!
//! Errors nest: each object field that fails wraps the inner error in
//! a [`DecodeError::Field`] frame, so a deep failure reads like
//! `message: from: id: expected integer, found string`.

use std::fmt;

use crate::parse::{ParseError, parse, parse_bytes};
use crate::value::{Kind, Map, Value};

/// Anything that can be read back out of a JSON tree.
pub trait Decode: Sized {
    /// Reads `Self` from an already-parsed value.
    fn decode(value: &Value) -> Result<Self, DecodeError>;

    /// Parses `text` and decodes the resulting tree.
    ///
    /// ```
    /// use botwire_json::{Decode, DecodeError};
    ///
    /// let ids = Vec::<i64>::from_json("[1, 2, 3]")?;
    /// assert_eq!(ids, [1, 2, 3]);
    /// # Ok::<_, DecodeError>(())
    /// ```
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        Self::decode(&parse(text)?)
    }

    /// Parses a raw UTF-8 body and decodes the resulting tree.
    fn from_json_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(&parse_bytes(bytes)?)
    }
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// The reason a JSON tree could not be decoded into the requested type.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
    /// The document never parsed; decoding did not start.
    Syntax(ParseError),
    /// A required field was absent, or present as `null`.
    Missing {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A value had the wrong JSON kind for the requested type.
    Mismatch {
        /// The kind the decoder wanted.
        expected: Kind,
        /// The kind the tree held.
        found: Kind,
    },
    /// Context frame naming the field or index the inner error
    /// happened under.
    Field {
        /// Field name, or `[i]` for an array element.
        name: String,
        /// What went wrong inside it.
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// A [`DecodeError::Mismatch`] against the kind actually found.
    pub fn mismatch(expected: Kind, found: &Value) -> Self {
        Self::Mismatch {
            expected,
            found: found.kind(),
        }
    }

    /// Wraps `source` in a [`DecodeError::Field`] frame.
    pub fn in_field(name: impl Into<String>, source: DecodeError) -> Self {
        Self::Field {
            name: name.into(),
            source: Box::new(source),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "invalid json: {e}"),
            Self::Missing { field } => write!(f, "missing required field `{field}`"),
            Self::Mismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::Field { name, source } => write!(f, "{name}: {source}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Field { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<ParseError> for DecodeError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

/// The value as an object, or a kind mismatch.
pub fn expect_object(value: &Value) -> Result<&Map, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::mismatch(Kind::Object, value))
}

// ─── Field access ─────────────────────────────────────────────────────────────

impl Map {
    /// Decodes a required field.
    ///
    /// Absent and `null` both count as missing. A failure inside the
    /// field is wrapped in a frame carrying the field name.
    ///
    /// ```
    /// use botwire_json::{DecodeError, expect_object, parse};
    ///
    /// let value = parse(r#"{"id": 7}"#)?;
    /// let map = expect_object(&value)?;
    /// assert_eq!(map.required::<i64>("id")?, 7);
    /// assert_eq!(
    ///     map.required::<i64>("missing"),
    ///     Err(DecodeError::Missing { field: "missing" }),
    /// );
    /// # Ok::<_, DecodeError>(())
    /// ```
    pub fn required<T: Decode>(&self, field: &'static str) -> Result<T, DecodeError> {
        match self.get(field) {
            None | Some(Value::Null) => Err(DecodeError::Missing { field }),
            Some(value) => T::decode(value).map_err(|e| DecodeError::in_field(field, e)),
        }
    }

    /// Decodes an optional field; absent and `null` read as `None`.
    ///
    /// A present, non-null value that fails to decode is still an
    /// error; optionality never swallows a malformed value.
    pub fn optional<T: Decode>(&self, field: &'static str) -> Result<Option<T>, DecodeError> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode(value)
                .map(Some)
                .map_err(|e| DecodeError::in_field(field, e)),
        }
    }
}

// ─── Implementations ──────────────────────────────────────────────────────────

impl Decode for bool {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::mismatch(Kind::Bool, value))
    }
}

impl Decode for i64 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Int(n) => Ok(*n),
            // fractional numbers truncate toward zero and saturate at
            // the i64 range
            Value::Float(x) => Ok(*x as i64),
            other => Err(DecodeError::mismatch(Kind::Int, other)),
        }
    }
}

impl Decode for f64 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::mismatch(Kind::Float, value))
    }
}

impl Decode for String {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::mismatch(Kind::Str, value))
    }
}

/// Passthrough; keeps fields nobody models available untouched.
impl Decode for Value {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::mismatch(Kind::Array, value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                T::decode(item).map_err(|e| DecodeError::in_field(format!("[{i}]"), e))
            })
            .collect()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        T::decode(value).map(Box::new)
    }
}
