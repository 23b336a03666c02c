//! Process-level wiring: OpenAPI artifact, registry, HTTP server, shutdown.

use crate::config::{Command, Config};
use crate::http::{self, AppState};
use crate::lifecycle::{RegistrySystem, ShutdownError};
use crate::openapi::{self, OpenApiError};
use std::io::{self, Write};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Failures that stop the process.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Server(#[source] io::Error),

    #[error(transparent)]
    OpenApi(#[from] OpenApiError),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error(transparent)]
    Shutdown(#[from] ShutdownError),
}

/// Runs whatever the configuration asks for: serving (default) or rendering the OpenAPI
/// document.
pub async fn run(config: Config) -> Result<(), ServeError> {
    match &config.command {
        Some(Command::Openapi { output }) => {
            let doc = openapi::document(&config.server_url());
            match output {
                Some(path) => openapi::write_document(&doc, path)?,
                None => {
                    let yaml = openapi::to_yaml(&doc)?;
                    io::stdout()
                        .write_all(yaml.as_bytes())
                        .map_err(ServeError::Stdout)?;
                }
            }
            Ok(())
        }
        Some(Command::Serve) | None => serve(&config, shutdown_signal()).await,
    }
}

/// Writes the OpenAPI artifact, starts the registry and serves HTTP until `shutdown` resolves.
pub async fn serve<F>(config: &Config, shutdown: F) -> Result<(), ServeError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Some(path) = config.startup_openapi_path() {
        openapi::write_document(&openapi::document(&config.server_url()), path)?;
    }

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    let system = RegistrySystem::new(config.channel_capacity);
    let app = http::create_app(AppState::new(system.product_client.clone()));

    let served = http::serve(listener, app, shutdown).await;
    // The router is gone at this point, so the actor can wind down.
    system.shutdown().await?;
    served.map_err(ServeError::Server)
}

/// Resolves on Ctrl-C (or immediately if the signal handler cannot be installed).
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
