//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one real route. Pages compose sections from `components`
//! and hold no state of their own.

pub mod portfolio;
