//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard widgets while reading shared services
//! (history store, resolver, messages, config) from Leptos context.

pub mod entity_list_skeleton;
pub mod recently_viewed;
