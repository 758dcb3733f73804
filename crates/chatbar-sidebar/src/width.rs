//! Width presets and the upper-bound clamp.

use chatbar_config::schema::BoundsConfig;

/// The sidebar's width presets in pixels.
///
/// Expected to satisfy `narrow < minimum < default_width < maximum`
/// (enforced by config validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBounds {
    pub narrow: i32,
    pub minimum: i32,
    pub default_width: i32,
    pub maximum: i32,
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self::from(&BoundsConfig::default())
    }
}

impl From<&BoundsConfig> for WidthBounds {
    fn from(config: &BoundsConfig) -> Self {
        Self {
            narrow: config.narrow,
            minimum: config.minimum,
            default_width: config.default_width,
            maximum: config.maximum,
        }
    }
}

impl WidthBounds {
    /// Cap a proposed width at `maximum`.
    ///
    /// Only the upper bound is applied. A result below `minimum` is a
    /// meaningful "collapse" signal that callers handle with [`snap`](Self::snap).
    pub fn clamp(&self, proposed: i32) -> i32 {
        proposed.min(self.maximum)
    }

    /// Replace anything below `minimum` with the narrow preset.
    pub fn snap(&self, width: i32) -> i32 {
        if width < self.minimum {
            self.narrow
        } else {
            width
        }
    }

    /// The collapse/expand flip: collapsed widths expand to the default,
    /// everything else collapses to the narrow preset.
    pub fn toggled(&self, current: i32) -> i32 {
        if current < self.minimum {
            self.default_width
        } else {
            self.narrow
        }
    }

    /// Whether `width` is a value the sidebar itself would ever persist.
    pub fn contains(&self, width: i32) -> bool {
        width == self.narrow || (self.minimum..=self.maximum).contains(&width)
    }
}
