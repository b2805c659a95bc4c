//! Server setup and lifecycle management.

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use sift_analyzers::builtin_analyzers;
use sift_core::Orchestrator;
use std::sync::Arc;
use tokio::net::TcpListener;

/// SIFT daemon server.
pub struct Server {
    config: DaemonConfig,
    orchestrator: Arc<Orchestrator>,
}

impl Server {
    /// Create a server over the built-in analyzer set.
    pub fn new(config: DaemonConfig) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(
            builtin_analyzers(),
            config.orchestrator.clone(),
        ));
        Self {
            config,
            orchestrator,
        }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.orchestrator.clone());
        let app = create_router(state, &self.config.server);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("SIFT daemon listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("SIFT daemon shut down");
        Ok(())
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
