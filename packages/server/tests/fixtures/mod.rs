//! Test fixtures for integration tests.

use std::{sync::Arc, time::Duration};

use parlor_server::{Server, ServerConfig};
use parlor_shared::time::SystemClock;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Server running on an ephemeral port for the duration of one test.
///
/// Dropping it triggers graceful shutdown.
pub struct TestServer {
    base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the default configuration.
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    /// Start a server with the given configuration (host and port are ignored).
    pub async fn start_with(config: ServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = Server::with_in_memory_store(&config, Arc::new(SystemClock));
        let sweep_interval = config.sweep_interval;
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = server.serve(listener, sweep_interval, shutdown).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown_tx: Some(shutdown_tx),
            _handle: handle,
        }
    }

    /// Start a server that sweeps quickly, for inactivity tests.
    pub async fn start_fast_sweeping(threshold: Duration, interval: Duration) -> Self {
        Self::start_with(ServerConfig {
            sweep_interval: interval,
            inactivity_threshold: threshold,
            ..ServerConfig::default()
        })
        .await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Register `name` and assert the server accepted it.
pub async fn register(client: &reqwest::Client, server: &TestServer, name: &str) {
    let response = client
        .post(server.url("/participants"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201, "registering {name}");
}

/// Post a message as `from` and assert the server accepted it.
pub async fn post(
    client: &reqwest::Client,
    server: &TestServer,
    from: &str,
    to: &str,
    text: &str,
    kind: &str,
) {
    let response = client
        .post(server.url("/messages"))
        .header("User", from)
        .json(&serde_json::json!({ "to": to, "text": text, "type": kind }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201, "posting {text}");
}

/// Texts of the messages visible to `viewer`.
pub async fn visible_texts(
    client: &reqwest::Client,
    server: &TestServer,
    viewer: &str,
) -> Vec<String> {
    let response = client
        .get(server.url("/messages"))
        .header("User", viewer)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body.as_array()
        .expect("Response should be an array")
        .iter()
        .map(|m| m["text"].as_str().unwrap_or_default().to_string())
        .collect()
}
