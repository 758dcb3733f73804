//! In-memory chat session list with wrap-around navigation.

use chatbar_sidebar::SessionNavigator;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SessionList {
    titles: Vec<String>,
    current: usize,
}

impl SessionList {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles, current: 0 }
    }

    /// `count` sessions titled "Session 1", "Session 2", ...
    pub fn with_count(count: usize) -> Self {
        Self::new((1..=count).map(|i| format!("Session {i}")).collect())
    }

    /// Index of the selected session, if there are any.
    pub fn current(&self) -> Option<usize> {
        (!self.titles.is_empty()).then_some(self.current)
    }

    pub fn current_title(&self) -> Option<&str> {
        self.titles.get(self.current).map(String::as_str)
    }
}

impl SessionNavigator for SessionList {
    fn navigate(&mut self, delta: i32) {
        if self.titles.is_empty() {
            return;
        }
        let len = self.titles.len() as i64;
        let next = (self.current as i64 + i64::from(delta)).rem_euclid(len);
        self.current = next as usize;
        debug!(delta, index = self.current, "selected session");
    }
}
