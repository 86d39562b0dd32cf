//! Shared test helpers: mock endpoints and observable output sinks.
#![allow(dead_code)]

use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use serde_json::json;
use tokio::io::AsyncWrite;
use voicetext::config::{Endpoints, VoiceTextConfig};
use voicetext::VoiceTextClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/auth/oauth/v1/token";
pub const CLIENT_ID: &str = "test-id";
pub const CLIENT_SECRET: &str = "test-secret";

pub fn config_for(server: &MockServer) -> VoiceTextConfig {
    VoiceTextConfig::new(CLIENT_ID, CLIENT_SECRET)
        .with_endpoints(Endpoints::with_base_url(&server.uri()))
        .with_timeout(Duration::from_secs(5))
}

pub fn client_for(server: &MockServer) -> VoiceTextClient {
    VoiceTextClient::from_config(config_for(server)).expect("client should build")
}

pub fn token_body(access_token: &str, refresh_token: &str) -> serde_json::Value {
    json!({
        "refresh_token": refresh_token,
        "access_token": access_token,
        "expires_in": "3600",
        "scope": {"tts": 1, "asr_short": 1, "asr_stream": 0}
    })
}

/// Client that already holds `access-1` / `refresh-1`.
pub async fn authenticated_client(server: &MockServer) -> VoiceTextClient {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .up_to_n_times(1)
        .mount(server)
        .await;

    let mut client = client_for(server);
    client.authenticate().await.expect("initial authentication");
    client
}

/// A port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// What happened to a [`RecordingSink`] after it was handed off.
#[derive(Clone, Default)]
pub struct SinkProbe {
    bytes: Arc<Mutex<Vec<u8>>>,
    shut_down: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl SinkProbe {
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().expect("probe lock poisoned").clone()
    }

    pub fn was_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    /// The sink was dropped.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Records writes; optionally fails once `fail_after` bytes were accepted.
pub struct RecordingSink {
    probe: SinkProbe,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> (Self, SinkProbe) {
        let probe = SinkProbe::default();
        (
            Self {
                probe: probe.clone(),
                fail_after: None,
            },
            probe,
        )
    }

    pub fn failing_after(limit: usize) -> (Self, SinkProbe) {
        let (mut sink, probe) = Self::new();
        sink.fail_after = Some(limit);
        (sink, probe)
    }
}

impl AsyncWrite for RecordingSink {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let mut bytes = self.probe.bytes.lock().expect("probe lock poisoned");
        let accepted = match self.fail_after {
            Some(limit) if bytes.len() >= limit => {
                return Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "disk full")));
            }
            Some(limit) => buf.len().min(limit - bytes.len()),
            None => buf.len(),
        };
        bytes.extend_from_slice(&buf[..accepted]);
        Poll::Ready(Ok(accepted))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.probe.shut_down.store(true, Ordering::SeqCst);
        Poll::Ready(Ok(()))
    }
}

impl Drop for RecordingSink {
    fn drop(&mut self) {
        self.probe.closed.store(true, Ordering::SeqCst);
    }
}
