//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `relay` is the only outbound call the page makes; everything else on the
//! site is static content.

pub mod relay;
