use std::fmt;

use botwire_json::{Decode, DecodeError, Value, expect_object};

/// Extra information some Bot API failures carry.
///
/// <https://core.telegram.org/bots/api#responseparameters>
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseParameters {
    /// The group migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating the request.
    pub retry_after: Option<i64>,
}

impl Decode for ResponseParameters {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            migrate_to_chat_id: map.optional("migrate_to_chat_id")?,
            retry_after: map.optional("retry_after")?,
        })
    }
}

/// The envelope every Bot API response arrives in.
///
/// Built once per HTTP round-trip and consumed right away through
/// [`Response::into_result`]; nothing here is meant to be kept around.
#[derive(Clone, Debug, PartialEq)]
pub struct Response<T> {
    /// `true` if the request succeeded.
    pub ok: bool,
    /// The payload, present when `ok`.
    pub result: Option<T>,
    /// Error code, mirrors HTTP status codes for most failures.
    pub error_code: Option<i64>,
    /// Human-readable error description, verbatim from the server.
    pub description: Option<String>,
    /// Extra failure information.
    pub parameters: Option<ResponseParameters>,
}

impl<T: Decode> Decode for Response<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            ok: map.required("ok")?,
            result: map.optional("result")?,
            error_code: map.optional("error_code")?,
            description: map.optional("description")?,
            parameters: map.optional("parameters")?,
        })
    }
}

impl<T> Response<T> {
    /// Collapses the envelope into the payload or the reported error.
    ///
    /// A response marked ok that carries no result collapses to an
    /// [`ApiError`] with code 0; the live API does not produce such an
    /// envelope.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.ok {
            match self.result {
                Some(result) => Ok(result),
                None => Err(ApiError {
                    code: 0,
                    description: "response marked ok carried no result".to_owned(),
                    parameters: self.parameters,
                }),
            }
        } else {
            Err(ApiError {
                code: self.error_code.unwrap_or(0),
                description: self
                    .description
                    .unwrap_or_else(|| "unspecified error".to_owned()),
                parameters: self.parameters,
            })
        }
    }
}

/// A failure reported by the Bot API itself, as opposed to a transport
/// or decoding failure.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// Error code from the envelope.
    pub code: i64,
    /// Description from the envelope, verbatim.
    pub description: String,
    /// Extra failure information, when present.
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds the server asked us to back off, for flood-limit errors.
    pub fn retry_after_seconds(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error {}: {}", self.code, self.description)
    }
}

impl std::error::Error for ApiError {}
