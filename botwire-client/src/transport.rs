//! Pluggable request transport.
//!
//! This crate opens no sockets and speaks no TLS. Callers supply the
//! HTTP POST exchange as a [`Transport`] implementation over whatever
//! client their application already carries; tests supply canned
//! in-memory ones.

use crate::params::Params;

/// One blocking HTTP POST exchange with the Bot API.
///
/// `method` is the bare API method name (`sendMessage`); the
/// implementation owns URL construction including the bot token,
/// timeouts and any retry policy, and hands back the raw response
/// body. Implementations should block until the response is complete.
pub trait Transport {
    /// The error type returned by a failed exchange.
    type Error: std::error::Error + Send + Sync + 'static;

    /// POSTs `params` to `method` and returns the raw response body.
    fn exchange(&mut self, method: &str, params: &Params) -> Result<Vec<u8>, Self::Error>;
}
