//! MCP server runners for farmos-mcp.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use farmos_core::query::QueryEngine;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::FarmOsMcp;

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl Default for McpHttpConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:4030".parse().expect("valid MCP HTTP address"),
            stateful_mode: true,
            sse_keep_alive: Some(Duration::from_secs(15)),
            sse_retry: Some(Duration::from_secs(3)),
        }
    }
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    engine: QueryEngine,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = FarmOsMcp::new(engine);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Serves the MCP server using streamable HTTP transport, with a plain
/// `/health` route beside the `/mcp` service.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    engine: QueryEngine,
    config: McpHttpConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service: StreamableHttpService<FarmOsMcp, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(FarmOsMcp::new(engine.clone())),
            std::sync::Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                sse_retry: config.sse_retry,
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", service);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "serving MCP over streamable HTTP");
    axum::serve(listener, app).await?;
    Ok(())
}
