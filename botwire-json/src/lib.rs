//! JSON plumbing for the botwire Telegram Bot API crates.
//!
//! Everything the Bot API speaks is JSON text over HTTP, so this crate
//! owns the three layers between wire bytes and typed records:
//!
//! * the tree: [`Value`], the insertion-ordered [`Map`] and [`Kind`];
//! * the text codec: [`parse`] / [`parse_bytes`] on the way in,
//!   [`Encode`] and [`ObjectWriter`] on the way out;
//! * typed decoding: [`Decode`] with the [`Map::required`] and
//!   [`Map::optional`] field helpers, failing with [`DecodeError`].
//!
//! Records implement the two traits by hand, walking their own fields:
//!
//! ```
//! use botwire_json::{Decode, DecodeError, Encode, ObjectWriter, Value, expect_object};
//!
//! struct Dice {
//!     emoji: String,
//!     value: i64,
//! }
//!
//! impl Encode for Dice {
//!     fn encode(&self, out: &mut String) {
//!         let mut obj = ObjectWriter::new(out);
//!         obj.field("emoji", &self.emoji);
//!         obj.field("value", &self.value);
//!         obj.finish();
//!     }
//! }
//!
//! impl Decode for Dice {
//!     fn decode(value: &Value) -> Result<Self, DecodeError> {
//!         let map = expect_object(value)?;
//!         Ok(Self {
//!             emoji: map.required("emoji")?,
//!             value: map.required("value")?,
//!         })
//!     }
//! }
//!
//! let die = Dice::from_json(r#"{"emoji": "🎲", "value": 6}"#)?;
//! assert_eq!(die.value, 6);
//! assert_eq!(die.to_json(), r#"{"emoji":"🎲","value":6}"#);
//! # Ok::<_, DecodeError>(())
//! ```
//!
//! Encoding is compact (no whitespace) and omits absent optional
//! fields instead of writing `null`. Parsing accepts any valid JSON
//! document up to [`MAX_DEPTH`] nested containers and keeps unmodeled
//! fields available as plain [`Value`]s.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod de;
mod parse;
mod ser;
mod value;

pub use de::{Decode, DecodeError, expect_object};
pub use parse::{MAX_DEPTH, ParseError, parse, parse_bytes};
pub use ser::{Encode, ObjectWriter};
pub use value::{Kind, Map, Value};
