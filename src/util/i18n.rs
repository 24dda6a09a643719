//! Localized UI strings.
//!
//! Built-in English strings keyed like the catalog's translation files,
//! with per-deployment overrides from [`crate::config::CatalogUiConfig`].

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::BTreeMap;

pub const RECENT_VIEWS: &str = "label.recent-views";
pub const NO_RECENTLY_VIEWED_DATA: &str = "message.no-recently-viewed-data";
pub const MY_DATA: &str = "label.my-data";
pub const CUSTOMIZE: &str = "label.customize";
pub const DONE: &str = "label.done";
pub const ADD_WIDGET: &str = "label.add-widget";
pub const NO_WIDGETS: &str = "message.no-widgets";
pub const BACK_TO_MY_DATA: &str = "label.back-to-my-data";

fn builtin(key: &str) -> Option<&'static str> {
    match key {
        RECENT_VIEWS => Some("Recent Views"),
        NO_RECENTLY_VIEWED_DATA => Some("No recently viewed data."),
        MY_DATA => Some("My Data"),
        CUSTOMIZE => Some("Customize"),
        DONE => Some("Done"),
        ADD_WIDGET => Some("Add Recent Views"),
        NO_WIDGETS => Some("No widgets on this page."),
        BACK_TO_MY_DATA => Some("Back to My Data"),
        _ => None,
    }
}

/// String catalog provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    overrides: BTreeMap<String, String>,
}

impl Messages {
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Resolve `key`: override, then built-in, then the key itself.
    pub fn localize(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        builtin(key).map_or_else(|| key.to_owned(), str::to_owned)
    }
}
