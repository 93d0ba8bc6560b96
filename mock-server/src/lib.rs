//! Recording HTTP server for exercising the request builder end to end.
//!
//! Every request, whatever its method or path, is stored as the "last
//! request" in a shared `Recorder` and answered with a fixed `Reply`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};

/// A request as the server received it.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/?a=1&b=2`.
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// First value of a header. Names are matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The fixed response sent for every request.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: Bytes::new(),
        }
    }
}

/// Shared slot holding the most recent request.
#[derive(Clone, Debug, Default)]
pub struct Recorder(Arc<RwLock<Option<RecordedRequest>>>);

impl Recorder {
    pub async fn last(&self) -> Option<RecordedRequest> {
        self.0.read().await.clone()
    }

    /// Blocking read for callers outside the runtime, such as sync tests.
    pub fn blocking_last(&self) -> Option<RecordedRequest> {
        self.0.blocking_read().clone()
    }

    async fn store(&self, request: RecordedRequest) {
        *self.0.write().await = Some(request);
    }
}

#[derive(Clone)]
struct AppState {
    reply: Reply,
    recorder: Recorder,
}

pub fn app(reply: Reply, recorder: Recorder) -> Router {
    Router::new()
        .fallback(record)
        .with_state(AppState { reply, recorder })
}

pub async fn run(
    listener: TcpListener,
    reply: Reply,
    recorder: Recorder,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(reply, recorder)).await
}

async fn record(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Bytes) {
    let uri = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let recorded = RecordedRequest {
        method: method.to_string(),
        uri,
        headers,
        body: body.to_vec(),
    };
    tracing::info!(method = %recorded.method, uri = %recorded.uri, "recorded request");
    if let Ok(json) = serde_json::to_string(&recorded) {
        tracing::debug!(%json, "request details");
    }
    state.recorder.store(recorded).await;

    (state.reply.status, state.reply.body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_header_lookup_ignores_case() {
        let req = RecordedRequest {
            headers: vec![("x-custom-value".to_string(), "112233".to_string())],
            ..Default::default()
        };
        assert_eq!(req.header("X-Custom-Value"), Some("112233"));
        assert_eq!(req.header("missing"), None);
    }

    #[test]
    fn recorded_request_serializes_to_json() {
        let req = RecordedRequest {
            method: "POST".to_string(),
            uri: "/?a=1".to_string(),
            headers: Vec::new(),
            body: b"x".to_vec(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["uri"], "/?a=1");
        assert_eq!(json["body"], serde_json::json!([120]));
    }

    #[test]
    fn reply_defaults_to_empty_ok() {
        let reply = Reply::default();
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.body.is_empty());
    }

    #[test]
    fn recorder_starts_empty() {
        assert!(Recorder::default().blocking_last().is_none());
    }
}
