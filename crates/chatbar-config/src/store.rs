//! Runtime owner of the live configuration.
//!
//! [`ConfigStore`] wraps a [`tokio::sync::watch`] channel: readers take
//! snapshots, writers apply a closure under the channel's write lock, and
//! subscribers are woken only when a write actually changed something.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chatbar_common::ConfigError;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::schema::ChatbarConfig;
use crate::toml_loader;
use crate::toml_writer::save_config_to_path;

/// Shared handle to the live configuration. Clones share the same state.
#[derive(Clone)]
pub struct ConfigStore {
    tx: Arc<watch::Sender<ChatbarConfig>>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// An in-memory store with no backing file.
    pub fn new(config: ChatbarConfig) -> Self {
        let (tx, _rx) = watch::channel(config);
        Self {
            tx: Arc::new(tx),
            path: None,
        }
    }

    /// Open the config file at `path`, creating a default one if missing.
    /// [`save`](Self::save) writes back to the same file.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let config = toml_loader::load_or_create(path)?;
        Ok(Self::new(config).with_path(path))
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Snapshot of the current config.
    pub fn read(&self) -> ChatbarConfig {
        self.tx.borrow().clone()
    }

    /// The persisted sidebar width.
    pub fn width(&self) -> i32 {
        self.tx.borrow().sidebar.width
    }

    /// Atomically read-modify-write the config.
    ///
    /// Subscribers are notified only if the config changed. Returns whether
    /// it did. The closure runs under the write lock and must not call back
    /// into this store.
    pub fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut ChatbarConfig),
    {
        self.tx.send_if_modified(|config| {
            let before = config.clone();
            mutate(config);
            *config != before
        })
    }

    /// Atomically replace the sidebar width with `f(current)`.
    pub fn update_width<F>(&self, f: F) -> bool
    where
        F: FnOnce(i32) -> i32,
    {
        let changed = self.update(|config| {
            config.sidebar.width = f(config.sidebar.width);
        });
        if changed {
            debug!(width = self.width(), "sidebar width updated");
        }
        changed
    }

    /// A receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<ChatbarConfig> {
        self.tx.subscribe()
    }

    /// Persist the current config to the backing file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.path.as_deref().ok_or_else(|| {
            ConfigError::ParseError("config store has no backing file".into())
        })?;
        save_config_to_path(&self.read(), path)?;
        info!("saved config to {}", path.display());
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ChatbarConfig::default())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("width", &self.width())
            .field("path", &self.path)
            .finish()
    }
}
