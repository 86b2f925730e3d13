use marketmind::config::Config;
use marketmind::gateway::run_gateway_with_listener;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    _workspace: TempDir,
}

impl GatewayTestServer {
    /// Start a gateway whose completion endpoint is `upstream`. With
    /// `api_key` unset the credential is missing.
    pub async fn start(upstream: &MockServer, api_key: Option<&str>) -> Self {
        Self::start_with(upstream, api_key, |_, _| {}).await
    }

    /// Like [`start`](Self::start), letting `configure` adjust the config
    /// before the gateway boots. It receives the temp workspace path.
    pub async fn start_with(
        upstream: &MockServer,
        api_key: Option<&str>,
        configure: impl FnOnce(&mut Config, &Path),
    ) -> Self {
        let workspace = TempDir::new().expect("temp workspace should be created");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let mut config = Config::default();
        config.workspace_dir = workspace.path().to_path_buf();
        config.config_path = workspace.path().join("config.toml");
        config.api_key = api_key.map(str::to_string);
        config.completion.base_url = upstream.uri();
        config.completion.timeout_secs = 5;
        configure(&mut config, workspace.path());

        let config = Arc::new(config);
        let host = "127.0.0.1".to_string();
        let handle =
            tokio::spawn(async move { run_gateway_with_listener(&host, listener, config).await });

        wait_until_gateway_ready(port).await;

        Self {
            port,
            handle,
            _workspace: workspace,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }

    pub async fn post(&self, path: &str, body: &Value) -> Value {
        let response = reqwest::Client::new()
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("gateway request should complete");
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.expect("gateway response should be json")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = reqwest::get(self.url(path))
            .await
            .expect("gateway request should complete");
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.expect("gateway response should be json")
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}

/// Upstream that answers every chat completion with `content`.
pub async fn upstream_replying(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;
    server
}

/// Upstream that answers like [`upstream_replying`], but only after `delay`.
pub async fn upstream_delayed(content: &str, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": content},
                        "finish_reason": "stop"
                    }]
                }))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

/// Upstream that fails every call with `status`.
pub async fn upstream_failing(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}
