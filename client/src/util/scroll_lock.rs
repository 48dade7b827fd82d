//! Background scroll suspension while the mobile menu overlay is open.
//!
//! Sets `overflow: hidden` on `<body>` when locked and removes the property
//! when unlocked. Applying the same level twice is harmless. SSR paths no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline `overflow` value for `<body>` at a given lock level.
#[must_use]
pub fn body_overflow(locked: bool) -> Option<&'static str> {
    locked.then_some("hidden")
}

/// Apply the lock level to the document body.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = match body_overflow(locked) {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
