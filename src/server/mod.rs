//! Static asset server for the built front-end.
//!
//! Every path that does not resolve to a file under the asset directory is
//! answered with the entry document, so client-side routes survive reloads.

use crate::config::ServerConfig;
use crate::error::ServerError;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const ENTRY_DOCUMENT: &str = "index.html";

pub fn router(asset_dir: &Path) -> Router {
    let index_file = asset_dir.join(ENTRY_DOCUMENT);
    let static_service = ServeDir::new(asset_dir).fallback(ServeFile::new(index_file));

    Router::new()
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let entry = config.static_dir.join(ENTRY_DOCUMENT);
    if !entry.is_file() {
        return Err(ServerError::MissingEntryDocument(entry));
    }

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidInput => ServerError::InvalidAddress(addr.clone()),
            _ => ServerError::Io(e),
        })?;

    tracing::info!(
        addr = %addr,
        static_dir = %config.static_dir.display(),
        "HTTP Server is running"
    );

    axum::serve(listener, router(&config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
