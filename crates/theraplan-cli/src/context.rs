//! Wiring of stores and services for one CLI invocation.

use std::path::Path;

use tracing::{info, instrument};

use theraplan_adapters::{Snapshot, Stores, demo_snapshot};
use theraplan_core::{
    application::{ReminderService, ShortageService, StockService, TherapyService},
    domain::ReminderPolicy,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Loaded ward data plus the configuration the services are built from.
pub struct AppContext {
    stores: Stores,
    config: AppConfig,
}

impl AppContext {
    /// Load the snapshot named by the flag or the config, else the demo ward.
    #[instrument(skip_all)]
    pub fn load(config: AppConfig, snapshot_flag: Option<&Path>) -> CliResult<Self> {
        let stores = match config.snapshot(snapshot_flag) {
            Some(path) => {
                info!(path = %path.display(), "Loading snapshot");
                Snapshot::from_path(path)?.into_stores()?
            }
            None => {
                info!("No snapshot configured, using the demo ward");
                demo_snapshot().into_stores()?
            }
        };
        Ok(Self { stores, config })
    }

    pub fn therapies(&self) -> TherapyService {
        TherapyService::new(
            Box::new(self.stores.catalog.clone()),
            Box::new(self.stores.therapies.clone()),
        )
    }

    pub fn stock(&self) -> StockService {
        StockService::new(
            Box::new(self.stores.catalog.clone()),
            Box::new(self.stores.stock.clone()),
        )
    }

    pub fn shortages(&self) -> ShortageService {
        ShortageService::new(self.therapies(), self.stock())
    }

    /// Reminder service using the configured hour, length and module.
    pub fn reminders(&self) -> CliResult<ReminderService> {
        let scheduling = &self.config.scheduling;
        let policy: ReminderPolicy = scheduling.policy().map_err(|e| CliError::ConfigError {
            message: format!("invalid [scheduling] settings: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(ReminderService::new(
            self.therapies(),
            Box::new(self.stores.patients.clone()),
            Box::new(self.stores.reminders.clone()),
            policy,
        )
        .with_module(scheduling.module.clone()))
    }
}
