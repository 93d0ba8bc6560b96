//! Fluent HTTP request builder over a pluggable blocking transport.
//!
//! # Overview
//! `RequestBuilder` accumulates a method, a base URL, query parameters,
//! headers and one body, then materializes a `Request` on demand and
//! optionally dispatches it through a `Transport` (ureq by default).
//!
//! # Design
//! - Query, header and form values go through `Value`, a closed set of
//!   accepted kinds rendered to strings at the call boundary.
//! - The body is a single enum; setting one kind replaces the previous one,
//!   except that form fields accumulate.
//! - Every fallible operation has a `must_*` twin that panics instead of
//!   returning the error.
//! - `shortcut` holds one-call helpers for the common verbs; `headers` is a
//!   catalogue of header-name constants.

pub mod builder;
pub mod error;
pub mod headers;
pub mod http;
pub mod shortcut;
pub mod transport;
pub mod value;

pub use builder::RequestBuilder;
pub use error::{Error, Result};
pub use crate::http::{canonical_header_name, Request, RequestBody, Response};
pub use shortcut::*;
pub use transport::{Transport, UreqTransport};
pub use value::Value;
