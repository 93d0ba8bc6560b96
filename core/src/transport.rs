//! The network collaborator behind `RequestBuilder::send`.
//!
//! # Design
//! The builder never opens a connection itself. It hands a materialized
//! `Request` to a `Transport` and gets a `Response` back. `UreqTransport` is
//! the default; tests and callers with special needs plug in their own.
//! Timeouts, proxies and TLS are configured on the `ureq::Agent` passed to
//! `UreqTransport::new`, not on the builder.

use tracing::debug;
use ureq::SendBody;

use crate::error::{Error, Result};
use crate::http::{canonical_header_name, Request, RequestBody, Response};

/// Sends a request and returns the raw response.
///
/// Implementations must return non-2xx responses as `Ok`; status handling is
/// done by the caller.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> Result<Response>;
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Use a caller-configured agent.
    ///
    /// The agent should have `http_status_as_error(false)`, otherwise 4xx/5xx
    /// responses surface as transport errors instead of status errors. It also
    /// needs `allow_non_standard_methods(true)` to send extension methods such
    /// as `PURGE`.
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let mut builder = http::Request::builder()
            .method(request.method)
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let result = match request.body {
            None => self.agent.run(builder.body(()).map_err(Error::transport)?),
            Some(RequestBody::Bytes(bytes)) => self
                .agent
                .run(builder.body(bytes.as_slice()).map_err(Error::transport)?),
            Some(RequestBody::Reader(mut reader)) => {
                // The reader is dropped, and so closed, at the end of this arm.
                let body = SendBody::from_reader(&mut *reader);
                self.agent.run(builder.body(body).map_err(Error::transport)?)
            }
        };

        let response = result.map_err(|err| {
            debug!(url = %request.url, error = %err, "transport failed");
            Error::transport(err)
        })?;

        let (parts, body) = response.into_parts();
        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    canonical_header_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        Ok(Response::new(parts.status.as_u16(), headers, body.into_reader()))
    }
}
