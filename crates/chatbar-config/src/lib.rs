//! Chatbar configuration system.
//!
//! Provides TOML-based configuration for the navigation sidebar, a
//! validation pass, an atomic writer, and the [`ConfigStore`] that owns
//! the persisted sidebar width at runtime. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatbar_config::{load_config, ConfigStore};
//!
//! let config = load_config().expect("failed to load config");
//! let store = ConfigStore::new(config);
//! println!("sidebar width: {}", store.width());
//! ```

pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use schema::{ChatbarConfig, CONFIG_SCHEMA_VERSION};
pub use store::ConfigStore;
pub use toml_writer::save_config_to_path;

use std::path::Path;

use chatbar_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ChatbarConfig, ConfigError> {
    load_config_from(&toml_loader::default_config_path()?)
}

/// Like [`load_config`], for an explicit path.
///
/// Unlike [`toml_loader::load_from_path`], invalid values are an error
/// rather than a warning.
pub fn load_config_from(path: &Path) -> Result<ChatbarConfig, ConfigError> {
    let config = toml_loader::load_or_create(path)?;
    validation::validate(&config)?;
    Ok(config)
}
