//! MCP server entrypoint
//!
//! Wires configuration, the completion client, the dispatcher, and the
//! stdio transport. Configuration comes from the environment only; a
//! missing API credential refuses start-up (exit code 1).

use std::sync::Arc;

use anyhow::{Context, Result};
use relay_infrastructure::{ConfigLoader, HttpCompletionClient, LocalToolDispatcher, McpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;

    // stdout carries the protocol; all logging goes to stderr.
    let filter = if config.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!(
        api_base_url = %config.api_base_url,
        default_model = %config.default_model,
        "starting model-relay"
    );

    let gateway = Arc::new(HttpCompletionClient::new(&config));
    let dispatcher = Arc::new(LocalToolDispatcher::new(gateway));
    let server = McpServer::new(dispatcher);

    tokio::select! {
        result = server.serve(tokio::io::stdin(), tokio::io::stdout()) => {
            result.context("transport failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received termination signal, shutting down");
        }
    }

    Ok(())
}
