//! Core state for the Rihla trip planner: the trip budget selector and the
//! persisted light/dark theme preference.

pub mod budget;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod theme;
mod validation;

use std::sync::Arc;

pub use budget::{BudgetCategory, BudgetConfig, BudgetSnapshot, BudgetStore};
pub use config::{AppConfig, StorageBackend};
pub use error::{AppError, StorageError};
pub use storage::KeyValueStore;
pub use theme::{ColorScheme, Palette, PreferenceStore, SystemColorScheme, ThemeMode};

/// Stores owned by one UI session. The two stores never talk to each other.
pub struct AppState {
    pub budget: BudgetStore,
    pub theme: PreferenceStore,
}

impl AppState {
    /// Open the configured storage, resolve the theme and build the budget store.
    pub async fn bootstrap(
        config: &AppConfig,
        system: &dyn SystemColorScheme,
    ) -> Result<Self, AppError> {
        tracing::info!("Starting Rihla core v{}", env!("CARGO_PKG_VERSION"));

        let budget = BudgetStore::new(config.budget.clone(), None)?;
        let storage = open_storage(config)?;
        let theme = PreferenceStore::initialize(storage, system).await;

        Ok(Self { budget, theme })
    }
}

/// Build the durable store selected by `config.storage`.
pub fn open_storage(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>, AppError> {
    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::Sqlite => Arc::new(storage::SqliteStore::open(&config.data_dir)?),
        StorageBackend::Json => {
            std::fs::create_dir_all(&config.data_dir)?;
            Arc::new(storage::JsonFileStore::in_dir(&config.data_dir))
        }
        StorageBackend::Memory => Arc::new(storage::MemoryStore::new()),
    };
    tracing::debug!(backend = store.backend_name(), "Preference storage ready");
    Ok(store)
}
