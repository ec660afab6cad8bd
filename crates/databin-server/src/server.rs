use std::sync::Arc;

use tokio::net::TcpListener;

use databin_store::FileStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::{build_router, AppState};

/// The databin HTTP server.
pub struct DatabinServer {
    config: ServerConfig,
}

impl DatabinServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the data file and build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let store = FileStore::open(&self.config.data_path)?;
        Ok(build_router(
            AppState::new(Arc::new(store)),
            &self.config.static_dir,
        ))
    }

    /// Open the data file and serve requests until externally terminated.
    ///
    /// Failing to open or create the data file is fatal: there is no
    /// degraded mode without a usable backing file.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("databin listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}
