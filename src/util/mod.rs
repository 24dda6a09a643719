//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and catalog
//! resolution rules from page and component logic.

pub mod entity;
pub mod i18n;
pub mod local_storage;
pub mod visit_history;
