//! Device classification settings.

use serde::{Deserialize, Serialize};

/// Viewport thresholds used to classify the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Viewports at or below this width are treated as mobile.
    pub mobile_max_width: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 600,
        }
    }
}
