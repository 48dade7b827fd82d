//! One-shot reveal latch for page sections.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Tracks whether a section has entered the viewport at least once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    /// Feed one visibility observation.
    ///
    /// Returns `true` only for the observation that first reveals the section.
    /// Once revealed the latch never resets.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}
