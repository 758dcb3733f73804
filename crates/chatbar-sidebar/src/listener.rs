//! Scoped registration of process-wide input listeners.
//!
//! [`ListenerRegistry`] stands in for the host's global event dispatch
//! (window-level key and pointer listeners). Every registration returns a
//! [`ListenerGuard`]; dropping the guard removes exactly that listener, so
//! a listener can never outlive the component that installed it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::drag::{PointerEvent, PointerPhase};
use crate::hotkey::KeyInput;

/// Global event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    PointerMove,
    PointerUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyInput),
    Pointer(PointerEvent),
}

impl InputEvent {
    /// Listener kind this event is delivered to. Pointer-down targets the
    /// resize handle, not the window, so it has none.
    pub fn kind(&self) -> Option<ListenerKind> {
        match self {
            InputEvent::KeyDown(_) => Some(ListenerKind::KeyDown),
            InputEvent::Pointer(event) => match event.phase {
                PointerPhase::Down => None,
                PointerPhase::Move => Some(ListenerKind::PointerMove),
                PointerPhase::Up => Some(ListenerKind::PointerUp),
            },
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&InputEvent)>>;

struct Entry {
    id: u64,
    kind: ListenerKind,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded global listener table. Clones share the same table.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`. It stays installed until the returned
    /// guard is dropped.
    #[must_use = "dropping the guard immediately removes the listener"]
    pub fn add<F>(&self, kind: ListenerKind, listener: F) -> ListenerGuard
    where
        F: FnMut(&InputEvent) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.entries.push(Entry { id, kind, listener });
        trace!(id, ?kind, "listener added");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every listener of its kind, in registration order.
    ///
    /// Listeners may add or remove listeners while being called; a listener
    /// removed mid-dispatch is not called. Returns how many were called.
    pub fn dispatch(&self, event: &InputEvent) -> usize {
        let Some(kind) = event.kind() else {
            return 0;
        };

        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| (e.id, Rc::clone(&e.listener)))
            .collect();

        let mut called = 0;
        for (id, listener) in snapshot {
            if !self.contains(id) {
                continue;
            }
            // Re-entrant dispatch skips a listener that is already running.
            let Ok(mut f) = listener.try_borrow_mut() else {
                continue;
            };
            (&mut *f)(event);
            called += 1;
        }
        called
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of listeners installed for `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }

    fn contains(&self, id: u64) -> bool {
        self.inner.borrow().entries.iter().any(|e| e.id == id)
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps one listener installed. Dropping it unregisters the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|e| e.id != self.id);
            trace!(id = self.id, "listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn key(name: &str) -> InputEvent {
        InputEvent::KeyDown(KeyInput::alt(name))
    }

    #[test]
    fn guard_drop_removes_listener() {
        let registry = ListenerRegistry::new();
        let hits = Rc::new(RefCell::new(0));

        let guard = {
            let hits = Rc::clone(&hits);
            registry.add(ListenerKind::KeyDown, move |_| *hits.borrow_mut() += 1)
        };
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch(&key("a")), 1);

        drop(guard);
        assert!(registry.is_empty());
        assert_eq!(registry.dispatch(&key("a")), 0);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn dispatch_only_reaches_matching_kind() {
        let registry = ListenerRegistry::new();
        let _keys = registry.add(ListenerKind::KeyDown, |_| {});
        let _moves = registry.add(ListenerKind::PointerMove, |_| {});

        let t = Instant::now();
        assert_eq!(registry.dispatch(&InputEvent::Pointer(PointerEvent::moved(1, t))), 1);
        assert_eq!(registry.dispatch(&InputEvent::Pointer(PointerEvent::up(1, t))), 0);
        assert_eq!(registry.dispatch(&InputEvent::Pointer(PointerEvent::down(1, t))), 0);
        assert_eq!(registry.count(ListenerKind::KeyDown), 1);
        assert_eq!(registry.count(ListenerKind::PointerUp), 0);
    }

    #[test]
    fn dispatch_preserves_registration_order() {
        let registry = ListenerRegistry::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let guards: Vec<_> = (0..3)
            .map(|i| {
                let order = Rc::clone(&order);
                registry.add(ListenerKind::KeyDown, move |_| order.borrow_mut().push(i))
            })
            .collect();

        registry.dispatch(&key("x"));
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(guards);
        assert!(registry.is_empty());
    }

    #[test]
    fn listener_can_remove_itself_during_dispatch() {
        let registry = ListenerRegistry::new();
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));

        let guard = {
            let slot = Rc::clone(&slot);
            registry.add(ListenerKind::KeyDown, move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(guard);

        assert_eq!(registry.dispatch(&key("x")), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.dispatch(&key("x")), 0);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let registry = ListenerRegistry::new();
        let second_hits = Rc::new(RefCell::new(0));
        let second_slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));

        let _first = {
            let second_slot = Rc::clone(&second_slot);
            registry.add(ListenerKind::KeyDown, move |_| {
                second_slot.borrow_mut().take();
            })
        };
        let second = {
            let hits = Rc::clone(&second_hits);
            registry.add(ListenerKind::KeyDown, move |_| *hits.borrow_mut() += 1)
        };
        *second_slot.borrow_mut() = Some(second);

        assert_eq!(registry.dispatch(&key("x")), 1);
        assert_eq!(*second_hits.borrow(), 0);
    }

    #[test]
    fn guard_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let guard = registry.add(ListenerKind::PointerUp, |_| {});
        drop(registry);
        drop(guard);
    }

    #[test]
    fn pointer_down_has_no_listener_kind() {
        let t = Instant::now();
        assert_eq!(InputEvent::Pointer(PointerEvent::down(0, t)).kind(), None);
        assert_eq!(
            InputEvent::Pointer(PointerEvent::moved(0, t)).kind(),
            Some(ListenerKind::PointerMove)
        );
        assert_eq!(key("a").kind(), Some(ListenerKind::KeyDown));
    }
}
