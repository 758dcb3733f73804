//! Narrow (collapsed) layout mode.

use chatbar_common::DeviceClass;

use crate::width::WidthBounds;

/// Whether the sidebar should use its collapsed, icon-only layout.
///
/// Mobile never reports narrow here; its full-viewport sizing is handled by
/// [`resolve_width`](crate::viewport::resolve_width).
pub fn is_narrow(width: i32, device: DeviceClass, bounds: &WidthBounds) -> bool {
    match device {
        DeviceClass::Mobile => false,
        DeviceClass::Desktop => width < bounds.minimum,
    }
}
