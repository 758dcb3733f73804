//! Resizable navigation sidebar interaction logic.
//!
//! Turns raw pointer input on the sidebar's resize handle into a persisted
//! width, tells a click (collapse/expand toggle) apart from a drag, derives
//! the narrow layout mode, projects the resolved width onto a style
//! channel, and maps modifier+arrow keys to session navigation.
//!
//! Everything here is single-threaded and synchronous: the host feeds
//! events in, and every handler finishes before returning.

pub mod drag;
pub mod hotkey;
pub mod listener;
pub mod narrow;
pub mod sidebar;
pub mod store;
pub mod viewport;
pub mod width;

pub use drag::{
    DragGestureController, DragOutcome, DragSession, DragState, GestureTiming, PointerEvent,
    PointerPhase,
};
pub use hotkey::{session_delta, HotkeySessionNavigator, KeyInput, Modifiers, SessionNavigator};
pub use listener::{InputEvent, ListenerGuard, ListenerKind, ListenerRegistry};
pub use narrow::is_narrow;
pub use sidebar::Sidebar;
pub use store::WidthStore;
pub use viewport::{
    resolve_width, SidebarWidth, StyleChannel, StyleSheet, ViewportWidthSync,
    SIDEBAR_WIDTH_PROPERTY,
};
pub use width::WidthBounds;
