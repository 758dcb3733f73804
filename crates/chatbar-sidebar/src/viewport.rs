//! Projection of the resolved sidebar width onto the global style channel.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use chatbar_common::DeviceClass;
use tracing::trace;

use crate::narrow::is_narrow;
use crate::width::WidthBounds;

/// The style property layout code reads the sidebar width from.
pub const SIDEBAR_WIDTH_PROPERTY: &str = "--sidebar-width";

/// Rendered sidebar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    Pixels(i32),
    /// Fill the whole viewport (mobile).
    FullViewport,
}

impl fmt::Display for SidebarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarWidth::Pixels(px) => write!(f, "{px}px"),
            SidebarWidth::FullViewport => write!(f, "100vw"),
        }
    }
}

/// Resolve the width the sidebar should be rendered at.
pub fn resolve_width(width: i32, device: DeviceClass, bounds: &WidthBounds) -> SidebarWidth {
    if device.is_mobile() {
        return SidebarWidth::FullViewport;
    }
    if is_narrow(width, DeviceClass::Desktop, bounds) {
        SidebarWidth::Pixels(bounds.narrow)
    } else {
        SidebarWidth::Pixels(bounds.clamp(width))
    }
}

/// A named, string-valued style variable sink.
pub trait StyleChannel {
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: StyleChannel + ?Sized> StyleChannel for Rc<RefCell<T>> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.borrow_mut().set_property(name, value);
    }
}

/// In-memory style variables, e.g. a document root's custom properties.
#[derive(Debug, Default, Clone)]
pub struct StyleSheet {
    properties: HashMap<String, String>,
    writes: usize,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Total number of property writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleChannel for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
        self.writes += 1;
    }
}

/// Writes the resolved width to [`SIDEBAR_WIDTH_PROPERTY`] each time the
/// width or device class changes.
#[derive(Debug, Default)]
pub struct ViewportWidthSync {
    last_applied: Option<SidebarWidth>,
}

impl ViewportWidthSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(
        &mut self,
        width: i32,
        device: DeviceClass,
        bounds: &WidthBounds,
        channel: &mut dyn StyleChannel,
    ) -> SidebarWidth {
        let resolved = resolve_width(width, device, bounds);
        channel.set_property(SIDEBAR_WIDTH_PROPERTY, &resolved.to_string());
        trace!(%resolved, %device, width, "sidebar width applied");
        self.last_applied = Some(resolved);
        resolved
    }

    pub fn last_applied(&self) -> Option<SidebarWidth> {
        self.last_applied
    }
}
