use botwire_json::Decode;
use botwire_types::{Message, Response, Update, User};
use tracing::{debug, trace};

use crate::errors::CallError;
use crate::methods::{ChatId, GetMe, GetUpdates, Method, SendMessage};
use crate::transport::Transport;

/// A handle on one bot: a transport plus the memoized self [`User`].
///
/// Every call is synchronous and blocking: flatten, exchange, decode,
/// unwrap the envelope, in that order on the calling thread. The only
/// state the handle keeps across calls is the `getMe` memo;
/// long-polling is plain sequencing in the caller's loop, and retry
/// policy belongs to the [`Transport`] implementation.
pub struct Bot<T> {
    transport: T,
    me: Option<User>,
}

impl<T: Transport> Bot<T> {
    /// Wraps a transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            me: None,
        }
    }

    /// Calls one method and unwraps its envelope into the payload.
    pub fn call<M: Method>(&mut self, method: &M) -> Result<M::Response, CallError> {
        let params = method.to_params();
        debug!("[botwire] {} ({} params) …", M::NAME, params.len());
        let body = self
            .transport
            .exchange(M::NAME, &params)
            .map_err(|e| CallError::Transport(Box::new(e)))?;
        trace!("[botwire] {}: {} byte response", M::NAME, body.len());
        let response = Response::<M::Response>::from_json_bytes(&body)?;
        match response.into_result() {
            Ok(payload) => Ok(payload),
            Err(e) => {
                debug!("[botwire] {} failed: {e}", M::NAME);
                Err(CallError::Api(e))
            }
        }
    }

    /// The bot's own [`User`] record, fetched once per handle lifetime
    /// and memoized afterwards.
    pub fn me(&mut self) -> Result<User, CallError> {
        if let Some(user) = &self.me {
            return Ok(user.clone());
        }
        let user = self.call(&GetMe)?;
        self.me = Some(user.clone());
        Ok(user)
    }

    /// Sends a plain text message to `chat_id`.
    pub fn send_message(
        &mut self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<Message, CallError> {
        self.call(&SendMessage::new(chat_id, text))
    }

    /// Long-polls for updates after `offset`.
    pub fn get_updates(
        &mut self,
        offset: Option<i64>,
        timeout: Option<i64>,
    ) -> Result<Vec<Update>, CallError> {
        self.call(&GetUpdates {
            offset,
            timeout,
            ..GetUpdates::default()
        })
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
