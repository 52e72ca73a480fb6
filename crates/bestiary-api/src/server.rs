//! Catalog HTTP server lifecycle.
//!
//! [`start_server`] binds a TCP listener and serves the router until a
//! shutdown signal (`Ctrl-C`, or `SIGTERM` on Unix) arrives, then drains
//! in-flight requests. [`serve_on`] does the same on a listener the
//! caller already bound, which is what the end-to-end tests use.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Default TCP port, matching the port the browser client targets.
pub const DEFAULT_PORT: u16 = 3000;

/// Bind address and port for the catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Parse `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] if the pair is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServeError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServeError::Bind(format!("invalid address {}:{}: {e}", self.host, self.port)))
    }
}

/// Bind the configured address and serve until a shutdown signal.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServeError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServeError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, backend = state.gateway.backend_name(), "Catalog server listening");

    serve_on(listener, state, shutdown_signal()).await?;

    info!("Catalog server stopped");
    Ok(())
}

/// Serve the catalog on an existing listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServeError::Serve`] if the server hits a fatal I/O error.
pub async fn serve_on<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServeError::Serve(format!("serve error: {e}")))
}

/// Resolve on `Ctrl-C`, or on `SIGTERM` where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl-C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}

/// Errors that can occur when starting or running the catalog server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_port_3000() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn bad_host_is_a_bind_error() {
        let config = ServerConfig {
            host: String::from("not an address"),
            port: 3000,
        };
        assert!(matches!(config.socket_addr(), Err(ServeError::Bind(_))));
    }
}
