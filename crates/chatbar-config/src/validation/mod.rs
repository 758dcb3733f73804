//! Full configuration validation.
//!
//! Validates width-bound ordering, gesture timings, and device thresholds.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod device;
mod helpers;
mod sidebar;

#[cfg(test)]
mod tests;

use crate::schema::ChatbarConfig;
use chatbar_common::ConfigError;

/// Run all validations on a config, collecting all errors.
///
/// `sidebar.width` itself is never rejected: the sidebar pulls an
/// out-of-range width back into bounds on the next interaction.
pub fn validate(config: &ChatbarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sidebar::validate_bounds(&mut errors, config);
    sidebar::validate_gesture(&mut errors, config);
    device::validate_device(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
