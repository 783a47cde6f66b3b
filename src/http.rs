//! Health endpoint.
//!
//! Minimal HTTP listener run alongside the bot so deploy targets can probe
//! the process. Not part of the analysis pipeline.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

/// Serve `GET /` and `GET /healthz` on the given port until the process exits.
pub async fn run_health_server(port: u16) -> std::io::Result<()> {
    let router = Router::new()
        .route("/", get(health_handler))
        .route("/healthz", get(health_handler));

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "health endpoint listening");

    axum::serve(listener, router).await
}

async fn health_handler() -> &'static str {
    "ok"
}
