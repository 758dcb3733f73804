//! Drag/click gesture state for the sidebar resize handle.
//!
//! A pointer-down on the handle starts a [`DragSession`]. Pointer moves
//! commit throttled width updates. At pointer-up, a short interaction is
//! reinterpreted as a click and toggles the sidebar instead, overriding any
//! width the micro-movements may have committed.

use std::time::{Duration, Instant};

use chatbar_config::schema::GestureConfig;
use tracing::{debug, warn};

use crate::store::WidthStore;
use crate::width::WidthBounds;

// =============================================================================
// TYPES
// =============================================================================

/// Timing windows for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTiming {
    /// Minimum gap between accepted pointer moves.
    pub throttle: Duration,
    /// Interactions shorter than this are clicks.
    pub click_threshold: Duration,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self::from(&GestureConfig::default())
    }
}

impl From<&GestureConfig> for GestureTiming {
    fn from(config: &GestureConfig) -> Self {
        Self {
            throttle: Duration::from_millis(config.throttle_ms),
            click_threshold: Duration::from_millis(config.click_threshold_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: i32,
    pub at: Instant,
}

impl PointerEvent {
    pub fn down(x: i32, at: Instant) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            at,
        }
    }

    pub fn moved(x: i32, at: Instant) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            at,
        }
    }

    pub fn up(x: i32, at: Instant) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            at,
        }
    }
}

/// Reference values captured at pointer-down. Lives until pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub start_x: i32,
    pub start_width: i32,
    pub started_at: Instant,
    pub last_update: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What a single pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing to do in the current state.
    Ignored,
    /// A session began (or restarted).
    Started,
    /// Move dropped by the throttle window.
    Throttled,
    /// Move committed this width.
    Resized(i32),
    /// Drag ended; the last committed width stands.
    Released,
    /// Interaction was a click; the width was flipped to this value.
    Toggled(i32),
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Pointer gesture state machine for the resize handle.
#[derive(Debug, Clone)]
pub struct DragGestureController {
    bounds: WidthBounds,
    timing: GestureTiming,
    state: DragState,
}

impl DragGestureController {
    pub fn new(bounds: WidthBounds, timing: GestureTiming) -> Self {
        Self {
            bounds,
            timing,
            state: DragState::Idle,
        }
    }

    pub fn bounds(&self) -> &WidthBounds {
        &self.bounds
    }

    pub fn timing(&self) -> &GestureTiming {
        &self.timing
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Swap in new presets and timings. An active session keeps running.
    pub fn reconfigure(&mut self, bounds: WidthBounds, timing: GestureTiming) {
        self.bounds = bounds;
        self.timing = timing;
    }

    /// Feed one pointer event through the state machine.
    pub fn handle<S: WidthStore>(&mut self, event: PointerEvent, store: &S) -> DragOutcome {
        let (next, outcome) = self.transition(event, store);
        self.state = next;
        outcome
    }

    fn transition<S: WidthStore>(
        &self,
        event: PointerEvent,
        store: &S,
    ) -> (DragState, DragOutcome) {
        match (self.state, event.phase) {
            // A second pointer-down restarts the session.
            (_, PointerPhase::Down) => {
                let start_width = store.width();
                if !self.bounds.contains(start_width) {
                    warn!(
                        width = start_width,
                        "persisted sidebar width is out of bounds; next write will correct it"
                    );
                }
                debug!(x = event.x, width = start_width, "sidebar drag started");
                let session = DragSession {
                    start_x: event.x,
                    start_width,
                    started_at: event.at,
                    last_update: event.at,
                };
                (DragState::Dragging(session), DragOutcome::Started)
            }

            (DragState::Dragging(mut session), PointerPhase::Move) => {
                if event.at.saturating_duration_since(session.last_update) < self.timing.throttle {
                    return (DragState::Dragging(session), DragOutcome::Throttled);
                }
                session.last_update = event.at;

                let delta = event.x.saturating_sub(session.start_x);
                let proposed = self.bounds.clamp(session.start_width.saturating_add(delta));
                let committed = self.bounds.snap(proposed);
                store.update_width(|_| committed);
                (DragState::Dragging(session), DragOutcome::Resized(committed))
            }

            (DragState::Dragging(session), PointerPhase::Up) => {
                let elapsed = event.at.saturating_duration_since(session.started_at);
                if elapsed < self.timing.click_threshold {
                    let bounds = self.bounds;
                    store.update_width(|current| bounds.toggled(current));
                    let width = store.width();
                    debug!(?elapsed, width, "sidebar handle clicked, toggled");
                    (DragState::Idle, DragOutcome::Toggled(width))
                } else {
                    debug!(?elapsed, width = store.width(), "sidebar drag finished");
                    (DragState::Idle, DragOutcome::Released)
                }
            }

            (DragState::Idle, PointerPhase::Move | PointerPhase::Up) => {
                (DragState::Idle, DragOutcome::Ignored)
            }
        }
    }
}

impl Default for DragGestureController {
    fn default() -> Self {
        Self::new(WidthBounds::default(), GestureTiming::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
