//! Request and response descriptors exchanged with the transport.
//!
//! # Design
//! `Request` is what `RequestBuilder::build` materializes: a validated
//! method, the normalized URL, canonically-cased headers and an optional
//! body. `Response` is what a `Transport` hands back. Its body is a stream
//! owned by the caller; dropping the response closes it.
//!
//! Headers are kept as ordered `(name, value)` pairs so repeated names keep
//! every value in the order they were added.

use std::fmt;
use std::io::Read;

use http::{Method, StatusCode};

use crate::error::Result;

/// An outgoing request body.
pub enum RequestBody {
    /// A reusable in-memory payload.
    Bytes(Vec<u8>),
    /// A one-shot stream, dropped once the transport has drained it.
    Reader(Box<dyn Read + Send>),
}

impl RequestBody {
    /// Drain the body into memory.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            RequestBody::Bytes(bytes) => Ok(bytes),
            RequestBody::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            RequestBody::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

/// A fully materialized HTTP request.
///
/// Built by `RequestBuilder::build`. Header names are already canonical
/// (`x-custom-value` becomes `X-Custom-Value`).
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Request {
    /// All values of a header, matched case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response returned by a `Transport`.
pub struct Response {
    pub status: u16,
    /// Reason phrase, e.g. `Bad Request`. Empty for unknown codes.
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Box<dyn Read>,
}

impl Response {
    /// Assemble a response, deriving `status_text` from the status code.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Read + 'static) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            status_text,
            headers,
            body: Box::new(body),
        }
    }

    /// Status code and reason phrase, e.g. `400 Bad Request`.
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Read the whole body and close it.
    pub fn into_bytes(mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.body.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the whole body as UTF-8 text and close it.
    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.into_bytes()?)?)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Convert a header name to its canonical form: the first letter and every
/// letter following a hyphen upper-cased, the rest lower-cased.
///
/// Names containing bytes that are not valid in an HTTP token are returned
/// unchanged.
pub fn canonical_header_name(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
