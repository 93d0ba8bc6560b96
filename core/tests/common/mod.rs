//! Shared helpers for tests that talk to a live mock server.

#![allow(dead_code)]

use http::StatusCode;
use mock_server::{RecordedRequest, Recorder, Reply};

pub const DEFAULT_BODY: &[u8] = b"default body";

/// A mock server running on a random port in a background thread.
pub struct TestServer {
    pub url: String,
    recorder: Recorder,
}

impl TestServer {
    pub fn start(status: u16, body: &'static [u8]) -> Self {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let reply = Reply::new(StatusCode::from_u16(status).unwrap(), body);
        let recorder = Recorder::default();
        let server_recorder = recorder.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, reply, server_recorder).await
            })
            .unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            recorder,
        }
    }

    pub fn ok() -> Self {
        Self::start(200, DEFAULT_BODY)
    }

    /// The last request the server received.
    pub fn last_request(&self) -> RecordedRequest {
        self.recorder
            .blocking_last()
            .expect("server has not received a request")
    }
}
