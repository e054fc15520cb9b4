use crate::config::ServerConfig;
use crate::error::ServerResult;
use citydb_core::{CityCatalog, CityStore, LoadMode};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Published dataset snapshot (shared read-only across requests)
    pub catalog: Arc<CityCatalog>,

    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state, loading the dataset eagerly so a bad
    /// `data_path` fails at startup rather than on the first request.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog = CityCatalog::open(&config.data_path, config.load_mode)?;
        Ok(Self::with_catalog(config, Arc::new(catalog)))
    }

    pub fn with_catalog(config: ServerConfig, catalog: Arc<CityCatalog>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            started_at: Instant::now(),
        }
    }

    /// The store to answer the current request from.
    ///
    /// Per-request loading does blocking file I/O, so it is moved off the
    /// async workers.
    pub async fn store(&self) -> ServerResult<Arc<CityStore>> {
        match self.catalog.mode() {
            LoadMode::Snapshot => Ok(self.catalog.snapshot()?),
            LoadMode::PerRequest => {
                let catalog = Arc::clone(&self.catalog);
                Ok(tokio::task::spawn_blocking(move || catalog.snapshot()).await??)
            }
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
