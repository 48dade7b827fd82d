//! Local view state for the portfolio page.
//!
//! DESIGN
//! ======
//! Each module is plain data plus transition methods with no Leptos types,
//! so the rules are unit-testable without a browser. Components wrap these
//! structs in `RwSignal`s they own; nothing here is a process-wide global.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod typewriter;
