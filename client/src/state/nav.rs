//! Navbar chrome state: scroll density flag and mobile menu toggle.
//!
//! Both flags are owned by the `Navbar` component and updated from discrete
//! event handlers. They are level-triggered; repeating an update is a no-op.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical scroll offset (px) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute `scrolled` from the window scroll offset.
    ///
    /// Returns `true` when the flag changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let next = offset > SCROLL_THRESHOLD;
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Background page scrolling is suspended while the overlay is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }
}
