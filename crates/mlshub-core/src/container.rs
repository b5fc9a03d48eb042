//! Wiring of the long-lived services.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::api::NetworkService;
use crate::config::Config;
use crate::data::{DataRepository, LocalDataService, Repository};
use crate::settings::{FileStore, KeyValueStore, UserSettingsService};

/// Holds the repository and the settings service for the process lifetime.
pub struct AppContainer {
    pub settings: Arc<UserSettingsService>,
    pub repository: Arc<DataRepository>,
}

impl AppContainer {
    /// Build the services described by `config`, persisting settings on disk.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings_dir = config.settings_dir()?;
        debug!(?settings_dir, "Settings directory configured");
        Ok(Self::with_store(config, Arc::new(FileStore::new(settings_dir))))
    }

    pub fn with_store(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let mut local = LocalDataService::new();
        if let Some(ref dir) = config.resource_dir {
            local = local.prepend_dir(dir.clone());
        }

        let repository = DataRepository::new(Arc::new(local), NetworkService::default())
            .with_endpoint(config.stats_endpoint());

        Self {
            settings: Arc::new(UserSettingsService::new(store)),
            repository: Arc::new(repository),
        }
    }

    /// Load the team catalog. A failure leaves the catalog empty.
    pub async fn initialize(&self) {
        if let Err(e) = self.repository.load_local_teams().await {
            warn!(error = %e, "Failed to load team catalog, continuing with no teams");
        }
    }
}
