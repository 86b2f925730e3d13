use super::handlers::{
    handle_campaign, handle_dashboard_page, handle_dashboard_stats, handle_health,
    handle_index_page, handle_lead_score, handle_pitch,
};
use super::{AppState, MAX_BODY_SIZE};

use crate::activity::open_activity_log;
use crate::completion::CompletionClient;
use crate::config::{CREDENTIAL_ENV_VAR, Config};
use crate::generation::GenerationService;
use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

fn ensure_bind_allowed(host: &str, config: &Config) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the gateway would be reachable from other machines.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }
    Ok(())
}

/// Run the HTTP gateway using axum with proper HTTP/1.1 compliance.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    ensure_bind_allowed(host, &config)?;
    let listener = bind_listener(host, port).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Strip the brackets from an IPv6 literal such as `[::1]`.
fn bind_host(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host)
}

/// Bind `host:port`, resolving names like `localhost`.
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((bind_host(host), port))
        .await
        .with_context(|| format!("bind gateway socket {host}:{port}"))
}

async fn build_gateway_state(config: &Config) -> AppState {
    let client = CompletionClient::from_config(config);
    if !client.has_credential() {
        tracing::warn!(
            "{CREDENTIAL_ENV_VAR} is not set; generation endpoints will answer with an error"
        );
    }

    let activity = open_activity_log(&config.activity_db_path()).await;

    AppState {
        service: Arc::new(GenerationService::new(
            client,
            activity,
            config.prompts.max_field_chars,
        )),
        recent_limit: config.prompts.recent_activity_limit,
    }
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    ensure_bind_allowed(host, &config)?;

    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let state = build_gateway_state(&config).await;
    print_gateway_banner(&display_addr, &state);
    tracing::info!(addr = %display_addr, "gateway started");

    let app = build_app(state, &config.gateway.cors_origins);
    axum::serve(listener, app)
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str, state: &AppState) {
    println!("Gateway listening on http://{display_addr}");
    println!("  GET  /");
    println!("  GET  /dashboard");
    println!("  GET  /dashboard_stats");
    println!("  GET  /health");
    println!("  POST /generate_campaign");
    println!("  POST /generate_pitch");
    println!("  POST /lead_score");
    println!(
        "  Model: {} via {}",
        state.service.client().model(),
        state.service.client().provider_name()
    );
}

fn cors_layer(cors_origins: &[String]) -> Option<CorsLayer> {
    if cors_origins.is_empty() {
        return None;
    }
    let layer = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if cors_origins.iter().any(|origin| origin.trim() == "*") {
        Some(layer.allow_origin(Any))
    } else {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        Some(layer.allow_origin(origins))
    }
}

pub(super) fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    let app = Router::new()
        .route("/", get(handle_index_page))
        .route("/dashboard", get(handle_dashboard_page))
        .route("/dashboard_stats", get(handle_dashboard_stats))
        .route("/health", get(handle_health))
        .route("/generate_campaign", post(handle_campaign))
        .route("/generate_pitch", post(handle_pitch))
        .route("/lead_score", post(handle_lead_score))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE));

    match cors_layer(cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}
