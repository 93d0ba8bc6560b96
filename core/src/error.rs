//! Error types for the request builder.
//!
//! # Design
//! Build errors (`InvalidMethod`, `InvalidUrl`, `InvalidHeader`) are raised
//! before anything touches the network. `Transport` wraps whatever the
//! transport reports without interpreting it. `Status` is synthesized by the
//! reading helpers when the response is not `200 OK`; its message is exactly
//! the status line so callers can match on text such as `400 Bad Request`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `RequestBuilder` and the shortcut helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// The method is not a valid HTTP token.
    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    /// The assembled URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// A header name or value cannot be sent on the wire.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: &'static str },

    /// The server answered with something other than `200 OK`.
    #[error("{status_line}")]
    Status { status: u16, status_line: String },

    /// The transport failed to complete the round-trip.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading the response body failed.
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Transport(Box::new(err))
    }
}
