//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`layout` for the host page,
//! `recently_viewed` for one widget instance) so components depend on small
//! focused models that are testable without a browser.

pub mod layout;
pub mod recently_viewed;
