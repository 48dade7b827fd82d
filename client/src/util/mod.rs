//! Browser helpers shared by the page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` calls from component logic; each one
//! no-ops during server rendering.

pub mod anchor;
pub mod clock;
pub mod scroll_lock;
