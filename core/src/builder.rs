//! Fluent builder for a single HTTP request.
//!
//! # Design
//! `RequestBuilder` is a plain mutable value: configuration methods take
//! `&mut self` and return `&mut Self` so calls chain, and the same builder
//! can be dispatched more than once. Query parameters and headers are
//! append-only ordered pairs. The body is one `Body` variant at a time.
//!
//! String, binary and form bodies are rebuilt from the builder on every
//! `build`, so they are reusable. A reader body is moved out on the first
//! `build`; later builds send no body until `set_reader_body` is called
//! again.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use http::header::{HeaderName, HeaderValue};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::{form_urlencoded, Url};

use crate::error::{Error, Result};
use crate::headers::CONTENT_TYPE;
use crate::http::{canonical_header_name, Request, RequestBody, Response};
use crate::transport::{Transport, UreqTransport};
use crate::value::Value;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

enum Body {
    Empty,
    Text(String),
    Binary(Vec<u8>),
    /// `None` once the stream has been handed to a request.
    Reader(Option<Box<dyn Read + Send>>),
    Form(Vec<(String, String)>),
}

impl Body {
    fn materialize(&mut self) -> Option<RequestBody> {
        match self {
            Body::Empty => None,
            Body::Text(text) => Some(RequestBody::Bytes(text.as_bytes().to_vec())),
            Body::Binary(bytes) => Some(RequestBody::Bytes(bytes.clone())),
            Body::Reader(reader) => reader.take().map(RequestBody::Reader),
            Body::Form(fields) => Some(RequestBody::Bytes(encode_pairs(fields).into_bytes())),
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Body::Binary(bytes) => f.debug_tuple("Binary").field(&bytes.len()).finish(),
            Body::Reader(Some(_)) => f.write_str("Reader(..)"),
            Body::Reader(None) => f.write_str("Reader(drained)"),
            Body::Form(fields) => f.debug_tuple("Form").field(fields).finish(),
        }
    }
}

/// Accumulates the parts of an HTTP request and dispatches it.
///
/// ```no_run
/// use httplib::RequestBuilder;
///
/// let body = RequestBuilder::new("POST", "http://localhost:3000")
///     .with_query("q", 3)
///     .with_header("x-custom-value", 112233)
///     .with_form("f1", "vf1")
///     .read_string()?;
/// # Ok::<(), httplib::Error>(())
/// ```
pub struct RequestBuilder {
    method: String,
    base_url: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Body,
    transport: Arc<dyn Transport>,
}

impl RequestBuilder {
    /// Start a request. The method is only validated when the request is built.
    pub fn new(method: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            base_url: base_url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
            transport: Arc::new(UreqTransport::default()),
        }
    }

    /// The method exactly as given to `new`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Replace the transport used by `send` and the reading helpers.
    pub fn with_transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.transport = transport;
        self
    }

    /// Append a query parameter. Existing parameters with the same name are kept.
    pub fn with_query(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.query.push((name.into(), value.into().into_string()));
        self
    }

    /// Append every pair as a query parameter.
    ///
    /// Pairs are added in iteration order; for a `HashMap` that order is
    /// unspecified.
    pub fn with_queries<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in values {
            self.with_query(name, value);
        }
        self
    }

    /// Append a header. The name is canonicalized when the request is built.
    pub fn with_header(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.headers.push((name.into(), value.into().into_string()));
        self
    }

    pub fn with_headers<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in values {
            self.with_header(name, value);
        }
        self
    }

    /// Add a form field and mark the body as `application/x-www-form-urlencoded`.
    ///
    /// If the current body is not a form, it is discarded first.
    pub fn with_form(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.ensure_form()
            .push((name.into(), value.into().into_string()));
        self
    }

    /// Add every pair as a form field.
    ///
    /// Switches the body to form mode and sets the content type even when
    /// `values` is empty.
    pub fn with_forms<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let form = self.ensure_form();
        for (name, value) in values {
            form.push((name.into(), value.into().into_string()));
        }
        self
    }

    pub fn set_string_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Body::Text(body.into());
        self
    }

    pub fn set_binary_body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.body = Body::Binary(body.into());
        self
    }

    /// Use a stream as the body. It is consumed by the next dispatch and
    /// dropped afterwards.
    pub fn set_reader_body(&mut self, reader: impl Read + Send + 'static) -> &mut Self {
        self.body = Body::Reader(Some(Box::new(reader)));
        self
    }

    /// Serialize `value` as the body and set `Content-Type: application/json`.
    pub fn set_json_body<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        let json = serde_json::to_string(value).map_err(Error::Serialization)?;
        self.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        Ok(self.set_string_body(json))
    }

    /// The base URL followed by every query parameter added so far.
    ///
    /// Uses `&` as the separator when the base URL already has a query string.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.base_url.clone();
        }

        let query = encode_pairs(&self.query);
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{query}", self.base_url)
    }

    /// Materialize the request without sending it.
    ///
    /// An empty method means GET. Fails if the method is not a valid token,
    /// the URL does not parse or a header cannot be sent. A failed build leaves a reader body in place.
    pub fn build(&mut self) -> Result<Request> {
        let method = if self.method.is_empty() {
            Method::GET
        } else {
            Method::from_bytes(self.method.as_bytes())
                .map_err(|_| Error::InvalidMethod(self.method.clone()))?
        };

        let raw_url = self.url();
        let url = Url::parse(&raw_url).map_err(|source| Error::InvalidUrl {
            url: raw_url.clone(),
            source,
        })?;

        let headers = self
            .headers
            .iter()
            .map(|(name, value)| validate_header(name, value))
            .collect::<Result<Vec<_>>>()?;

        let body = self.body.materialize();
        trace!(body = ?body, "materialized request body");

        Ok(Request {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Build and send the request, returning the raw response.
    ///
    /// Any status is returned as `Ok`; the caller owns the response body.
    pub fn send(&mut self) -> Result<Response> {
        let request = self.build()?;
        debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.send(request)
    }

    /// Send the request and return the whole body if the status is `200 OK`.
    ///
    /// Any other status is returned as `Error::Status`; use `send` to inspect
    /// the body of such responses.
    pub fn read_binary(&mut self) -> Result<Vec<u8>> {
        let response = self.send()?;
        if !response.is_ok() {
            let status_line = response.status_line();
            debug!(status = response.status, "non-success status");
            return Err(Error::Status {
                status: response.status,
                status_line,
            });
        }
        response.into_bytes()
    }

    /// Same as `read_binary`, decoding the body as UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        Ok(String::from_utf8(self.read_binary()?)?)
    }

    /// Same as `read_binary`, deserializing the body as JSON.
    pub fn read_json<T: DeserializeOwned>(&mut self) -> Result<T> {
        let body = self.read_binary()?;
        serde_json::from_slice(&body).map_err(Error::Deserialization)
    }

    /// Panicking version of `build`.
    pub fn must_build(&mut self) -> Request {
        must(self.build())
    }

    /// Panicking version of `send`.
    pub fn must_send(&mut self) -> Response {
        must(self.send())
    }

    /// Panicking version of `read_binary`.
    pub fn must_read_binary(&mut self) -> Vec<u8> {
        must(self.read_binary())
    }

    /// Panicking version of `read_string`.
    pub fn must_read_string(&mut self) -> String {
        must(self.read_string())
    }

    /// Panicking version of `read_json`.
    pub fn must_read_json<T: DeserializeOwned>(&mut self) -> T {
        must(self.read_json())
    }

    fn ensure_form(&mut self) -> &mut Vec<(String, String)> {
        self.set_header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        if !matches!(self.body, Body::Form(_)) {
            self.body = Body::Form(Vec::new());
        }
        match &mut self.body {
            Body::Form(fields) => fields,
            _ => unreachable!("body was just set to a form"),
        }
    }

    /// Replace every value of `name` with `value`.
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("base_url", &self.base_url)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

fn must<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("{err}"))
}

/// `application/x-www-form-urlencoded` serialization, pairs kept in order.
fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

fn validate_header(name: &str, value: &str) -> Result<(String, String)> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeader {
        name: name.to_string(),
        reason: "invalid name",
    })?;
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader {
        name: name.to_string(),
        reason: "invalid value",
    })?;
    Ok((canonical_header_name(name), value.to_string()))
}
