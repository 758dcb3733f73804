//! Where the config file lives, and seeding it on first run.

use std::path::{Path, PathBuf};

use chatbar_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::toml_writer::write_atomically;

const APP_DIR: &str = "chatbar";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/chatbar/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomically(path, &default_config_toml())?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}
