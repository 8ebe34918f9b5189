//! Serialization of values and typed records into JSON text.
//!
//! Encoding is driven by the shape of the data, not by the target
//! text: an implementor walks its own fields and appends to a shared
//! `String` buffer. [`ObjectWriter`] handles the object punctuation so
//! record impls stay a flat list of `field` calls.

use std::fmt::{self, Write as _};

use crate::value::Value;

/// Anything that can turn itself into JSON text.
///
/// Implementors append to the output buffer; [`Encode::to_json`]
/// allocates one for the common case.
pub trait Encode {
    /// Appends the JSON encoding of `self` to `out`.
    fn encode(&self, out: &mut String);

    /// Encodes `self` into a freshly-allocated string.
    ///
    /// ```
    /// use botwire_json::Encode;
    ///
    /// assert_eq!(true.to_json(), "true");
    /// assert_eq!(vec![1_i64, 2, 3].to_json(), "[1,2,3]");
    /// assert_eq!("per\u{00f3}n\n".to_json(), r#""perón\n""#);
    /// ```
    fn to_json(&self) -> String {
        let mut out = String::new();
        self.encode(&mut out);
        out
    }
}

/// Writes one JSON object, tracking the comma between members.
///
/// Absent optional fields are omitted entirely, never written as
/// `null`; that is what [`ObjectWriter::field_opt`] is for.
///
/// ```
/// use botwire_json::ObjectWriter;
///
/// let mut out = String::new();
/// let mut obj = ObjectWriter::new(&mut out);
/// obj.field("chat_id", &42_i64);
/// obj.field_opt("text", &Some("hi"));
/// obj.field_opt("title", &None::<String>);
/// obj.finish();
/// assert_eq!(out, r#"{"chat_id":42,"text":"hi"}"#);
/// ```
pub struct ObjectWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl<'a> ObjectWriter<'a> {
    /// Opens an object, writing the `{`.
    pub fn new(out: &'a mut String) -> Self {
        out.push('{');
        Self { out, first: true }
    }

    /// Writes one `"name":value` member.
    pub fn field(&mut self, name: &str, value: &(impl Encode + ?Sized)) {
        if !self.first {
            self.out.push(',');
        }
        self.first = false;
        encode_str(name, self.out);
        self.out.push(':');
        value.encode(self.out);
    }

    /// Writes the member if the value is present, skips it entirely if
    /// not.
    pub fn field_opt(&mut self, name: &str, value: &Option<impl Encode>) {
        if let Some(value) = value {
            self.field(name, value);
        }
    }

    /// Closes the object, writing the `}`.
    pub fn finish(self) {
        self.out.push('}');
    }
}

/// Appends `s` as a quoted JSON string literal.
///
/// `"` and `\` get their two-character escapes, the five control
/// characters with shorthand forms use them, the rest of `0x00..0x20`
/// becomes `\u00XX`. Everything else passes through as UTF-8.
fn encode_str(s: &str, out: &mut String) {
    out.push('"');
    let mut run = 0;
    for (i, byte) in s.bytes().enumerate() {
        let escape = match byte {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x08 => Some("\\b"),
            0x0C => Some("\\f"),
            b'\n' => Some("\\n"),
            b'\r' => Some("\\r"),
            b'\t' => Some("\\t"),
            0x00..=0x1F => None,
            _ => continue,
        };
        // runs break only at ASCII control bytes, so the slice cannot
        // split a multi-byte character
        out.push_str(&s[run..i]);
        match escape {
            Some(seq) => out.push_str(seq),
            None => {
                let _ = write!(out, "\\u{byte:04x}");
            }
        }
        run = i + 1;
    }
    out.push_str(&s[run..]);
    out.push('"');
}

// ─── Implementations ──────────────────────────────────────────────────────────

impl Encode for bool {
    fn encode(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! impl_encode_int {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

impl_encode_int!(i32, i64, u32, u64);

impl Encode for f64 {
    /// Finite floats print through `Display`; NaN and the infinities
    /// have no JSON spelling and encode as `null`.
    fn encode(&self, out: &mut String) {
        if self.is_finite() {
            let _ = write!(out, "{self}");
        } else {
            out.push_str("null");
        }
    }
}

impl Encode for str {
    fn encode(&self, out: &mut String) {
        encode_str(self, out);
    }
}

impl Encode for String {
    fn encode(&self, out: &mut String) {
        encode_str(self, out);
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            item.encode(out);
        }
        out.push(']');
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, out: &mut String) {
        self.as_slice().encode(out);
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut String) {
        (**self).encode(out);
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, out: &mut String) {
        (**self).encode(out);
    }
}

impl Encode for Value {
    fn encode(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => b.encode(out),
            Self::Int(n) => n.encode(out),
            Self::Float(x) => x.encode(out),
            Self::Str(s) => encode_str(s, out),
            Self::Array(items) => items.encode(out),
            Self::Object(map) => {
                let mut obj = ObjectWriter::new(out);
                for (key, value) in map.iter() {
                    obj.field(key, value);
                }
                obj.finish();
            }
        }
    }
}

/// Displays the value as compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}
