//! Sidebar width, bounds, and gesture timing configuration types.

use serde::{Deserialize, Serialize};

/// Width presets the sidebar snaps between, in pixels.
///
/// Must satisfy `narrow < minimum < default < maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Width used while collapsed.
    pub narrow: i32,
    /// Smallest width shown with labels; anything below collapses.
    pub minimum: i32,
    /// Width restored when expanding from the collapsed state.
    #[serde(rename = "default")]
    pub default_width: i32,
    pub maximum: i32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            narrow: 100,
            minimum: 230,
            default_width: 300,
            maximum: 500,
        }
    }
}

/// Pointer gesture timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum gap between accepted pointer-move updates.
    pub throttle_ms: u64,
    /// Pointer-down to pointer-up durations shorter than this are clicks.
    pub click_threshold_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 20,
            click_threshold_ms: 300,
        }
    }
}

/// Navigation sidebar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Persisted panel width in pixels. Values below `bounds.minimum` mean
    /// the sidebar is collapsed.
    pub width: i32,
    pub bounds: BoundsConfig,
    pub gesture: GestureConfig,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        let bounds = BoundsConfig::default();
        Self {
            width: bounds.default_width,
            bounds,
            gesture: GestureConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
