//! The persisted-width capability the gesture controller writes through.

use chatbar_config::ConfigStore;

/// Read and atomically rewrite the persisted sidebar width.
pub trait WidthStore {
    fn width(&self) -> i32;

    /// Replace the width with `f(current)` as one read-modify-write,
    /// visible to the next [`width`](Self::width).
    fn update_width<F>(&self, f: F)
    where
        F: FnOnce(i32) -> i32;
}

impl WidthStore for ConfigStore {
    fn width(&self) -> i32 {
        ConfigStore::width(self)
    }

    fn update_width<F>(&self, f: F)
    where
        F: FnOnce(i32) -> i32,
    {
        ConfigStore::update_width(self, f);
    }
}
