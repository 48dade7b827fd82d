//! In-page anchor navigation.
//!
//! Smooth-scrolls to a section by id, leaving room for the fixed navbar.
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::content::NAV_SCROLL_OFFSET;

/// Document-relative scroll target for a section whose top edge is
/// `rect_top` px from the viewport while the page is scrolled `scroll_y` px.
#[must_use]
pub fn scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y - NAV_SCROLL_OFFSET).max(0.0)
}

/// `href` used for a section link so navigation still works without WASM.
#[must_use]
pub fn section_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Smooth-scroll the window to the section with `section_id`.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window
            .document()
            .and_then(|d| d.get_element_by_id(section_id))
        else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_id;
    }
}
