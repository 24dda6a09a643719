//! Widget layout for the customizable My Data page.
//!
//! The page is the host side of the widget-container protocol: it owns
//! which widgets exist and their keys. Widgets only ask to be removed.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

pub const LAYOUT_STORAGE_KEY: &str = "catalog_ui_my_data_layout";
pub const RECENTLY_VIEWED_KEY: &str = "KnowledgePanel.RecentlyViewed";

/// Pluggable panels the page knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    RecentlyViewed,
}

impl WidgetKind {
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::RecentlyViewed => RECENTLY_VIEWED_KEY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSlot {
    pub key: String,
    pub kind: WidgetKind,
}

/// Ordered widget slots plus the page's edit-mode flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub widgets: Vec<WidgetSlot>,
    #[serde(skip)]
    pub edit_mode: bool,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self {
            widgets: vec![WidgetSlot { key: RECENTLY_VIEWED_KEY.to_owned(), kind: WidgetKind::RecentlyViewed }],
            edit_mode: false,
        }
    }
}

impl WidgetLayout {
    /// Append a widget with a fresh `{prefix}-{uuid}` key and return the key.
    pub fn add_widget(&mut self, kind: WidgetKind) -> String {
        let key = format!("{}-{}", kind.key_prefix(), uuid::Uuid::new_v4());
        self.widgets.push(WidgetSlot { key: key.clone(), kind });
        key
    }

    /// Remove the widget with `key`. Returns `false` if it was not present.
    pub fn remove_widget(&mut self, key: &str) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.key != key);
        self.widgets.len() != before
    }

    pub fn contains(&self, key: &str) -> bool {
        self.widgets.iter().any(|w| w.key == key)
    }

    pub fn toggle_edit(&mut self) {
        self.edit_mode = !self.edit_mode;
    }
}
