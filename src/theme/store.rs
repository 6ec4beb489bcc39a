use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use super::mode::{ColorScheme, ThemeMode};
use super::palette::Palette;
use super::system::SystemColorScheme;
use crate::error::AppError;
use crate::storage::{keys, KeyValueStore};

/// Where the current mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSource {
    /// Read back from durable storage.
    Stored,
    /// Taken from the host color scheme because nothing usable was stored.
    System,
    /// Neither storage nor host had an answer.
    Default,
    /// Set by the user during this session.
    Explicit,
}

/// Pick the starting mode. A valid stored value always wins over the host.
pub fn resolve_initial(stored: Option<&str>, host: ColorScheme) -> (ThemeMode, ModeSource) {
    if let Some(mode) = stored.and_then(ThemeMode::from_setting) {
        return (mode, ModeSource::Stored);
    }
    match host {
        ColorScheme::Dark => (ThemeMode::Dark, ModeSource::System),
        ColorScheme::Light => (ThemeMode::Light, ModeSource::System),
        ColorScheme::Unspecified => (ThemeMode::Light, ModeSource::Default),
    }
}

/// Current theme mode backed by a durable key-value store.
///
/// A `PreferenceStore` only exists once [`PreferenceStore::initialize`] has
/// resolved, so readers always see a settled mode. Mutations take `&mut self`,
/// which keeps at most one persistence write in flight per store.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    mode: ThemeMode,
    source: ModeSource,
    tx: watch::Sender<ThemeMode>,
}

impl PreferenceStore {
    /// Resolve the starting mode: stored value, then host scheme, then light.
    ///
    /// Never writes to storage. A failed read is logged and handled like a
    /// first run.
    pub async fn initialize(
        storage: Arc<dyn KeyValueStore>,
        system: &dyn SystemColorScheme,
    ) -> Self {
        let stored = match storage.get(keys::THEME).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    backend = storage.backend_name(),
                    "Failed to read theme preference, using system scheme: {}",
                    e
                );
                None
            }
        };

        if let Some(raw) = stored.as_deref() {
            if ThemeMode::from_setting(raw).is_none() {
                tracing::warn!(value = %raw, "Ignoring unrecognized stored theme");
            }
        }

        let (mode, source) = resolve_initial(stored.as_deref(), system.color_scheme());
        let (tx, _rx) = watch::channel(mode);

        tracing::info!(mode = %mode, source = ?source, "Theme preference initialized");

        Self {
            storage,
            mode,
            source,
            tx,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn source(&self) -> ModeSource {
        self.source
    }

    pub fn current_palette(&self) -> &'static Palette {
        Palette::for_mode(self.mode)
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }

    /// Persist `mode`, then adopt it.
    ///
    /// On a failed write the previous mode is kept and the error returned;
    /// the UI should show the toggle as reverted.
    pub async fn set_mode(&mut self, mode: ThemeMode) -> Result<(), AppError> {
        if let Err(e) = self.storage.set(keys::THEME, mode.as_setting()).await {
            tracing::error!(
                backend = self.storage.backend_name(),
                attempted = %mode,
                kept = %self.mode,
                "Failed to persist theme preference: {}",
                e
            );
            return Err(e.into());
        }

        tracing::info!(mode = %mode, "Theme preference saved");
        self.source = ModeSource::Explicit;
        self.adopt(mode);
        Ok(())
    }

    /// Switch to the other mode. Returns the mode now in effect.
    pub async fn toggle(&mut self) -> Result<ThemeMode, AppError> {
        self.set_mode(self.mode.opposite()).await?;
        Ok(self.mode)
    }

    /// Forget the saved choice and follow the host scheme again.
    pub async fn follow_system(
        &mut self,
        system: &dyn SystemColorScheme,
    ) -> Result<ThemeMode, AppError> {
        self.storage.remove(keys::THEME).await?;
        let (mode, source) = resolve_initial(None, system.color_scheme());
        tracing::info!(mode = %mode, "Theme preference cleared, following system");
        self.source = source;
        self.adopt(mode);
        Ok(self.mode)
    }

    fn adopt(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            self.mode = mode;
            self.tx.send_replace(mode);
        }
    }
}
