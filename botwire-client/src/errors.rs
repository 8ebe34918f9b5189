use std::fmt;

use botwire_json::DecodeError;
use botwire_types::ApiError;

/// Why a call through [`crate::Bot`] failed.
#[derive(Debug)]
pub enum CallError {
    /// The transport failed before a complete response arrived.
    Transport(Box<dyn std::error::Error + Send + Sync>),
    /// The API answered with an error envelope.
    Api(ApiError),
    /// The response body did not parse or decode.
    Decode(DecodeError),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Api(e) => write!(f, "{e}"),
            Self::Decode(e) => write!(f, "bad response: {e}"),
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(&**e),
            Self::Api(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<ApiError> for CallError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<DecodeError> for CallError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}
