//! HTTP server.
//!
//! Routes:
//!
//! - `GET /` - the editor page
//! - `POST /open` - turn a question into a chat link (and optionally open it)

mod routes;


use crate::browser::BrowserLauncher;
use crate::config::{Config, TabMode};
use crate::error::{ArgstoneError, Result};
use crate::link::LinkSettings;
use crate::prompt::{Category, PromptTemplates};
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Read-only state shared by all requests.
pub struct AppState {
    pub link: LinkSettings,
    pub templates: PromptTemplates,
    pub default_category: Category,
    pub tab_mode: TabMode,
    pub launcher: Arc<dyn BrowserLauncher>,
}

impl AppState {
    pub fn new(config: &Config, launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self {
            link: config.link_settings(),
            templates: config.prompt_templates(),
            default_category: config.default_category,
            tab_mode: config.tab_mode,
            launcher,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/open", post(routes::open_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Format a `host:port` listen address, bracketing IPv6 literals.
pub fn listen_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ArgstoneError::ServerError(format!("failed to bind {}: {}", addr, e)))?;

    let local: Option<SocketAddr> = listener.local_addr().ok();
    info!(addr = ?local, tab_mode = state.tab_mode.as_str(), "server_listening");

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ArgstoneError::ServerError(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown_signal_received");
}
