//! Configuration schema types for Chatbar.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the sidebar ships with.

mod device;
mod sidebar;
mod system;

pub use device::*;
pub use sidebar::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Chatbar.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ChatbarConfig {
    pub sidebar: SidebarConfig,
    pub device: DeviceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
