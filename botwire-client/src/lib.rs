//! Blocking client plumbing for the Telegram Bot API.
//!
//! [`Bot`] drives the whole pipeline: a request record flattens
//! through [`ToParams`] into [`Params`], goes out through a
//! caller-supplied [`Transport`], and the response body comes back
//! through the envelope as a typed payload or a [`CallError`]. The
//! crate ships only the handful of methods a long-polling bot needs;
//! everything HTTP (URLs, tokens, TLS, timeouts) lives behind the
//! [`Transport`] trait.
//!
//! ```
//! use botwire_client::{Bot, CallError, Params, Transport};
//!
//! // a canned transport standing in for a real HTTP client
//! struct Canned;
//!
//! impl Transport for Canned {
//!     type Error = std::io::Error;
//!
//!     fn exchange(&mut self, _method: &str, _params: &Params) -> Result<Vec<u8>, Self::Error> {
//!         Ok(br#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"demo"}}"#.to_vec())
//!     }
//! }
//!
//! let mut bot = Bot::new(Canned);
//! let me = bot.me()?;
//! assert_eq!(me.first_name, "demo");
//! # Ok::<_, CallError>(())
//! ```

#![deny(unsafe_code)]

mod bot;
mod errors;
mod methods;
mod params;
mod transport;

pub use bot::Bot;
pub use errors::CallError;
pub use methods::{AnswerCallbackQuery, ChatId, GetMe, GetUpdates, Method, ParseMode, SendMessage};
pub use params::{Params, ToParam, ToParams};
pub use transport::Transport;
