//! Persisting the config back to disk.
//!
//! Writes go to a sibling `.toml.tmp` file that is then renamed over the
//! target, so readers see either the old file or the new one.

use std::path::Path;

use chatbar_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::{ChatbarConfig, CONFIG_SCHEMA_VERSION};

/// Serialize `config` and write it to `path` atomically.
///
/// The persisted sidebar width is written as-is, even when it lies outside
/// the configured bounds.
pub fn save_config_to_path(config: &ChatbarConfig, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
    let contents = format!("# chatbar configuration (schema v{CONFIG_SCHEMA_VERSION})\n\n{body}");
    write_atomically(path, &contents)?;
    debug!(path = %path.display(), width = config.sidebar.width, "config written");
    Ok(())
}

/// Write `contents` to `path` through a temporary sibling file.
///
/// Falls back to writing `path` directly when the rename is refused
/// (e.g. the target is held open on Windows).
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), ConfigError> {
    ensure_parent_dir(path)?;

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents).map_err(|e| write_error(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        warn!(path = %path.display(), "rename of temporary config failed ({e}); writing in place");
        // Best effort: a leftover tmp file is harmless.
        let _ = std::fs::remove_file(&tmp);
        std::fs::write(path, contents).map_err(|e| write_error(path, e))?;
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| {
                ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
            }),
        _ => Ok(()),
    }
}

fn write_error(path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saved_config_loads_back_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ChatbarConfig::default();
        config.sidebar.width = 100;
        config.sidebar.bounds.maximum = 640;
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# chatbar configuration (schema v1)"));
        let parsed: ChatbarConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn out_of_range_width_is_persisted_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ChatbarConfig::default();
        config.sidebar.width = -40;
        save_config_to_path(&config, &path).unwrap();

        let parsed: ChatbarConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.sidebar.width, -40);
    }

    #[test]
    fn missing_parent_dirs_are_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chatbar").join("nested").join("config.toml");

        save_config_to_path(&ChatbarConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn temporary_file_does_not_survive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        write_atomically(&path, "[sidebar]\nwidth = 320\n").unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[sidebar]\nwidth = 320\n"
        );
    }

    #[test]
    fn overwrite_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        write_atomically(&path, "old").unwrap();
        write_atomically(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
