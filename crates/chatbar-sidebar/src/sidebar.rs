//! The mounted sidebar: wires gestures, hotkeys, and the style projection
//! to one configuration store for the lifetime of a [`Sidebar`] value.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use chatbar_common::DeviceClass;
use chatbar_config::{ChatbarConfig, ConfigStore};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::drag::{DragGestureController, DragOutcome, GestureTiming, PointerEvent};
use crate::hotkey::{HotkeySessionNavigator, SessionNavigator};
use crate::listener::{InputEvent, ListenerGuard, ListenerKind, ListenerRegistry};
use crate::narrow::is_narrow;
use crate::viewport::{SidebarWidth, StyleChannel, ViewportWidthSync};
use crate::width::WidthBounds;

struct SidebarState {
    store: ConfigStore,
    changes: watch::Receiver<ChatbarConfig>,
    registry: ListenerRegistry,
    drag: DragGestureController,
    viewport: ViewportWidthSync,
    style: Box<dyn StyleChannel>,
    device: DeviceClass,
    mobile_max_width: u32,
    /// Pointer move/up listeners installed for the active drag.
    drag_listeners: Vec<ListenerGuard>,
}

impl SidebarState {
    fn handle_pointer(&mut self, event: PointerEvent) -> DragOutcome {
        let reconfigured = self.absorb_external_changes();
        let outcome = self.drag.handle(event, &self.store);
        if reconfigured || matches!(outcome, DragOutcome::Resized(_) | DragOutcome::Toggled(_)) {
            self.refresh();
        }
        outcome
    }

    /// Adopt bounds, timings, and thresholds written by anyone else since
    /// the last look. Must run before this sidebar writes to the store,
    /// since [`refresh`](Self::refresh) marks everything up to then as seen.
    fn absorb_external_changes(&mut self) -> bool {
        if !self.changes.has_changed().unwrap_or(false) {
            return false;
        }
        let config = self.changes.borrow_and_update().clone();
        self.reconfigure(&config);
        true
    }

    fn reconfigure(&mut self, config: &ChatbarConfig) {
        self.drag.reconfigure(
            WidthBounds::from(&config.sidebar.bounds),
            GestureTiming::from(&config.sidebar.gesture),
        );
        self.mobile_max_width = config.device.mobile_max_width;
    }

    /// Re-project the current width and device class onto the style channel.
    fn refresh(&mut self) -> SidebarWidth {
        // Our own writes need no second pass through `sync`.
        self.changes.borrow_and_update();
        let width = self.store.width();
        let bounds = *self.drag.bounds();
        self.viewport
            .apply(width, self.device, &bounds, self.style.as_mut())
    }
}

/// A mounted navigation sidebar.
///
/// Mounting installs the global key listener; each drag installs pointer
/// move/up listeners until the pointer is released. Dropping the value
/// (unmounting) removes every listener it installed.
pub struct Sidebar {
    state: Rc<RefCell<SidebarState>>,
    _keyboard: ListenerGuard,
}

impl Sidebar {
    pub fn mount<N>(
        registry: &ListenerRegistry,
        store: ConfigStore,
        sessions: Rc<RefCell<N>>,
        style: Box<dyn StyleChannel>,
        device: DeviceClass,
    ) -> Self
    where
        N: SessionNavigator + 'static,
    {
        let config = store.read();
        let state = SidebarState {
            changes: store.subscribe(),
            store,
            registry: registry.clone(),
            drag: DragGestureController::new(
                WidthBounds::from(&config.sidebar.bounds),
                GestureTiming::from(&config.sidebar.gesture),
            ),
            viewport: ViewportWidthSync::new(),
            style,
            device,
            mobile_max_width: config.device.mobile_max_width,
            drag_listeners: Vec::new(),
        };
        let state = Rc::new(RefCell::new(state));
        let resolved = state.borrow_mut().refresh();

        let navigator = HotkeySessionNavigator;
        let keyboard = registry.add(ListenerKind::KeyDown, move |event| {
            let InputEvent::KeyDown(input) = event else {
                return;
            };
            match sessions.try_borrow_mut() {
                Ok(mut sessions) => {
                    navigator.handle(input, &mut *sessions);
                }
                Err(_) => warn!("session list busy, dropping navigation hotkey"),
            }
        });

        info!(%device, %resolved, "sidebar mounted");
        Self {
            state,
            _keyboard: keyboard,
        }
    }

    /// Pointer-down on the resize handle.
    pub fn on_drag_start(&self, x: i32, at: Instant) -> DragOutcome {
        let mut state = self.state.borrow_mut();
        let outcome = state.handle_pointer(PointerEvent::down(x, at));

        // Replace, never stack, listeners from an unfinished drag.
        state.drag_listeners.clear();
        let weak = Rc::downgrade(&self.state);
        let on_move = state
            .registry
            .add(ListenerKind::PointerMove, pointer_listener(weak.clone(), false));
        let on_up = state
            .registry
            .add(ListenerKind::PointerUp, pointer_listener(weak, true));
        state.drag_listeners = vec![on_move, on_up];
        outcome
    }

    /// Collapse or expand, as a click on the handle would.
    pub fn toggle(&self) -> i32 {
        let mut state = self.state.borrow_mut();
        state.absorb_external_changes();
        let bounds = *state.drag.bounds();
        state.store.update_width(|current| bounds.toggled(current));
        state.refresh();
        state.store.width()
    }

    /// Pick up writes made to the store by anyone else. Returns whether the
    /// style channel was refreshed.
    pub fn sync(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.absorb_external_changes() {
            return false;
        }
        state.refresh();
        true
    }

    pub fn set_device_class(&self, device: DeviceClass) {
        let mut state = self.state.borrow_mut();
        if state.device == device {
            return;
        }
        info!(from = %state.device, to = %device, "device class changed");
        state.absorb_external_changes();
        state.device = device;
        state.refresh();
    }

    /// Reclassify the device from a new viewport width.
    pub fn set_viewport_width(&self, viewport_width: u32) -> DeviceClass {
        let mobile_max_width = {
            let mut state = self.state.borrow_mut();
            state.absorb_external_changes();
            state.mobile_max_width
        };
        let device = DeviceClass::for_viewport(viewport_width, mobile_max_width);
        self.set_device_class(device);
        device
    }

    pub fn should_narrow(&self) -> bool {
        let state = self.state.borrow();
        is_narrow(state.store.width(), state.device, state.drag.bounds())
    }

    pub fn width(&self) -> i32 {
        self.state.borrow().store.width()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.state.borrow().device
    }

    pub fn resolved_width(&self) -> Option<SidebarWidth> {
        self.state.borrow().viewport.last_applied()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.borrow().drag.is_dragging()
    }
}

impl std::fmt::Debug for Sidebar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Sidebar")
            .field("width", &state.store.width())
            .field("device", &state.device)
            .field("drag", state.drag.state())
            .finish()
    }
}

/// Window-level pointer listener for an active drag. The pointer-up
/// listener also uninstalls both drag listeners.
fn pointer_listener(
    state: Weak<RefCell<SidebarState>>,
    ends_drag: bool,
) -> impl FnMut(&InputEvent) + 'static {
    move |event| {
        let InputEvent::Pointer(pointer) = event else {
            return;
        };
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut state = state.borrow_mut();
        state.handle_pointer(*pointer);
        if ends_drag {
            state.drag_listeners.clear();
        }
    }
}
