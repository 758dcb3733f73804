//! JSON event scripts and their replay against a mounted sidebar.
//!
//! A script is a JSON array of tagged events with times in milliseconds
//! from the start of the replay:
//!
//! ```json
//! [
//!   { "type": "pointer_down", "x": 300, "t": 0 },
//!   { "type": "pointer_move", "x": 340, "t": 40 },
//!   { "type": "pointer_up", "x": 340, "t": 500 },
//!   { "type": "key_down", "key": "ArrowDown", "alt": true },
//!   { "type": "viewport", "width": 480 }
//! ]
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chatbar_common::{ChatbarError, DeviceClass};
use chatbar_config::ConfigStore;
use chatbar_sidebar::{
    InputEvent, KeyInput, ListenerRegistry, Modifiers, PointerEvent, Sidebar, StyleSheet,
    SIDEBAR_WIDTH_PROPERTY,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::sessions::SessionList;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Pointer-down on the resize handle.
    PointerDown { x: i32, t: u64 },
    PointerMove { x: i32, t: u64 },
    PointerUp { x: i32, t: u64 },
    KeyDown {
        key: String,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
    },
    /// The viewport was resized.
    Viewport { width: u32 },
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptEvent>, ChatbarError> {
    serde_json::from_str(json).map_err(|e| ChatbarError::Script(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ChatbarError> {
    let json = std::fs::read_to_string(path)?;
    let events = parse_script(&json)?;
    info!(path = %path.display(), events = events.len(), "event script loaded");
    Ok(events)
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub width: i32,
    pub narrow: bool,
    pub device: DeviceClass,
    /// Value of `--sidebar-width` on the style sheet.
    pub sidebar_width: Option<String>,
    pub session: Option<usize>,
    pub session_title: Option<String>,
    pub events: usize,
}

/// Mount a sidebar over `store` and feed it `events` in order.
pub fn replay(
    events: &[ScriptEvent],
    store: ConfigStore,
    sessions: Rc<RefCell<SessionList>>,
    viewport_width: u32,
) -> ReplaySummary {
    let registry = ListenerRegistry::new();
    let sheet = Rc::new(RefCell::new(StyleSheet::new()));
    let device = DeviceClass::for_viewport(viewport_width, store.read().device.mobile_max_width);
    let sidebar = Sidebar::mount(
        &registry,
        store,
        Rc::clone(&sessions),
        Box::new(Rc::clone(&sheet)),
        device,
    );

    let origin = Instant::now();
    let at = |t: u64| origin + Duration::from_millis(t);
    for event in events {
        debug!(?event, "replaying");
        match event {
            ScriptEvent::PointerDown { x, t } => {
                sidebar.on_drag_start(*x, at(*t));
            }
            ScriptEvent::PointerMove { x, t } => {
                registry.dispatch(&InputEvent::Pointer(PointerEvent::moved(*x, at(*t))));
            }
            ScriptEvent::PointerUp { x, t } => {
                registry.dispatch(&InputEvent::Pointer(PointerEvent::up(*x, at(*t))));
            }
            ScriptEvent::KeyDown {
                key,
                alt,
                ctrl,
                shift,
                meta,
            } => {
                let modifiers = Modifiers {
                    ctrl: *ctrl,
                    alt: *alt,
                    shift: *shift,
                    meta: *meta,
                };
                registry.dispatch(&InputEvent::KeyDown(KeyInput::new(key.as_str(), modifiers)));
            }
            ScriptEvent::Viewport { width } => {
                sidebar.set_viewport_width(*width);
            }
        }
    }

    let sessions = sessions.borrow();
    let summary = ReplaySummary {
        width: sidebar.width(),
        narrow: sidebar.should_narrow(),
        device: sidebar.device_class(),
        sidebar_width: sheet.borrow().get(SIDEBAR_WIDTH_PROPERTY).map(str::to_string),
        session: sessions.current(),
        session_title: sessions.current_title().map(str::to_string),
        events: events.len(),
    };
    info!(width = summary.width, narrow = summary.narrow, "replay finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbar_config::ChatbarConfig;

    fn run(json: &str, viewport_width: u32) -> ReplaySummary {
        let events = parse_script(json).unwrap();
        let sessions = Rc::new(RefCell::new(SessionList::with_count(3)));
        replay(&events, ConfigStore::default(), sessions, viewport_width)
    }

    #[test]
    fn parse_all_event_types() {
        let events = parse_script(
            r#"[
                {"type":"pointer_down","x":1,"t":0},
                {"type":"pointer_move","x":2,"t":20},
                {"type":"pointer_up","x":3,"t":40},
                {"type":"key_down","key":"ArrowUp","ctrl":true},
                {"type":"viewport","width":480}
            ]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], ScriptEvent::PointerDown { x: 1, t: 0 });
        assert_eq!(
            events[3],
            ScriptEvent::KeyDown {
                key: "ArrowUp".into(),
                alt: false,
                ctrl: true,
                shift: false,
                meta: false,
            }
        );
        assert_eq!(events[4], ScriptEvent::Viewport { width: 480 });
    }

    #[test]
    fn parse_rejects_unknown_event_type() {
        let err = parse_script(r#"[{"type":"scroll","dy":3}]"#).unwrap_err();
        assert!(matches!(err, ChatbarError::Script(_)));
        assert!(err.to_string().contains("event script error"));
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(parse_script(r#"{"type":"viewport","width":1}"#).is_err());
    }

    #[test]
    fn load_script_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#"[{"type":"viewport","width":800}]"#).unwrap();
        assert_eq!(load_script(&path).unwrap().len(), 1);
    }

    #[test]
    fn load_script_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_script(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ChatbarError::Io(_)));
    }

    #[test]
    fn empty_script_reports_mounted_state() {
        let summary = run("[]", 1280);
        assert_eq!(summary.width, 300);
        assert!(!summary.narrow);
        assert_eq!(summary.device, DeviceClass::Desktop);
        assert_eq!(summary.sidebar_width.as_deref(), Some("300px"));
        assert_eq!(summary.session, Some(0));
        assert_eq!(summary.events, 0);
    }

    #[test]
    fn drag_widens_sidebar() {
        let summary = run(
            r#"[
                {"type":"pointer_down","x":300,"t":0},
                {"type":"pointer_move","x":340,"t":25},
                {"type":"pointer_move","x":420,"t":50},
                {"type":"pointer_up","x":420,"t":400}
            ]"#,
            1280,
        );
        assert_eq!(summary.width, 420);
        assert_eq!(summary.sidebar_width.as_deref(), Some("420px"));
    }

    #[test]
    fn drag_below_minimum_snaps_narrow() {
        let summary = run(
            r#"[
                {"type":"pointer_down","x":300,"t":0},
                {"type":"pointer_move","x":150,"t":30},
                {"type":"pointer_up","x":150,"t":500}
            ]"#,
            1280,
        );
        assert_eq!(summary.width, 100);
        assert!(summary.narrow);
        assert_eq!(summary.sidebar_width.as_deref(), Some("100px"));
    }

    #[test]
    fn quick_click_collapses() {
        let summary = run(
            r#"[
                {"type":"pointer_down","x":300,"t":0},
                {"type":"pointer_up","x":300,"t":100}
            ]"#,
            1280,
        );
        assert_eq!(summary.width, 100);
        assert!(summary.narrow);
    }

    #[test]
    fn hotkeys_navigate_sessions_with_wrap_around() {
        let summary = run(
            r#"[
                {"type":"key_down","key":"ArrowUp","alt":true},
                {"type":"key_down","key":"ArrowDown"}
            ]"#,
            1280,
        );
        assert_eq!(summary.session, Some(2));
        assert_eq!(summary.session_title.as_deref(), Some("Session 3"));
    }

    #[test]
    fn mobile_viewport_fills_screen() {
        let summary = run(r#"[{"type":"viewport","width":375}]"#, 1280);
        assert_eq!(summary.device, DeviceClass::Mobile);
        assert!(!summary.narrow);
        assert_eq!(summary.sidebar_width.as_deref(), Some("100vw"));
    }

    #[test]
    fn initial_viewport_classifies_device() {
        let summary = run("[]", 600);
        assert_eq!(summary.device, DeviceClass::Mobile);
    }

    #[test]
    fn replay_is_deterministic() {
        let script = r#"[
            {"type":"pointer_down","x":300,"t":0},
            {"type":"pointer_move","x":310,"t":5},
            {"type":"pointer_move","x":360,"t":21},
            {"type":"pointer_move","x":380,"t":30},
            {"type":"pointer_move","x":410,"t":45},
            {"type":"pointer_up","x":410,"t":350}
        ]"#;
        let first = run(script, 1280);
        let second = run(script, 1280);
        assert_eq!(first, second);
        assert_eq!(first.width, 410);
    }

    #[test]
    fn replay_writes_through_to_store() {
        let store = ConfigStore::new(ChatbarConfig::default());
        let events = parse_script(
            r#"[
                {"type":"pointer_down","x":300,"t":0},
                {"type":"pointer_move","x":350,"t":40},
                {"type":"pointer_up","x":350,"t":400}
            ]"#,
        )
        .unwrap();
        let sessions = Rc::new(RefCell::new(SessionList::default()));
        let summary = replay(&events, store.clone(), sessions, 1280);
        assert_eq!(store.width(), 350);
        assert_eq!(summary.session, None);
    }
}
