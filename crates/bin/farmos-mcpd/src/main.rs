//! Daemon entry point for the Farm OS MCP server.
//!
//! Loads configuration from the environment, builds the immutable dataset
//! and query engine, and serves the MCP protocol over stdio and/or
//! streamable HTTP.

mod config;

use farmos_core::dataset::FarmDataset;
use farmos_core::query::QueryEngine;
use farmos_mcp::server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::FarmOsConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr; stdout belongs to the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = FarmOsConfig::from_args()?;
    let dataset = match &config.dataset {
        Some(path) => FarmDataset::from_json(&std::fs::read_to_string(path)?)?,
        None => FarmDataset::builtin(),
    };
    info!(
        farms = dataset.farms().len(),
        fields = dataset.fields().len(),
        "dataset loaded"
    );
    let engine = QueryEngine::new(dataset);

    if config.http_serve {
        let http = server::serve_streamable_http(engine.clone(), config.http);
        if config.enable_stdio {
            tokio::spawn(async move {
                if let Err(err) = http.await {
                    error!(%err, "streamable HTTP server exited");
                }
            });
        } else {
            return http.await.map_err(Into::into);
        }
    }

    server::serve_stdio(engine).await?;
    Ok(())
}
