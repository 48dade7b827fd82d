//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per logical section; responsive layout is expressed with
//! breakpoint classes rather than separate mobile/desktop variants. Sections
//! read static data from `content` and own whatever view state they need.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod section_heading;
pub mod skills;
