//! Deployment configuration for the catalog UI.
//!
//! Parsed from JSON (every field optional) and validated before use. The
//! browser build reads an override from `localStorage`; anything missing or
//! invalid falls back to defaults with a logged warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::util::i18n::Messages;
use crate::util::local_storage;
use crate::util::visit_history::{DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};

pub const CONFIG_STORAGE_KEY: &str = "catalog_ui_config";
pub const DEFAULT_PLACEHOLDER_ROWS: usize = 5;
pub const DEFAULT_LABEL_MAX_CHARS: usize = 48;
const MAX_CAPACITY: usize = 100;

/// Settings for the Recently Viewed widget and its history store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentlyViewedConfig {
    pub storage_key: String,
    pub capacity: usize,
    pub placeholder_rows: usize,
    /// Visible label length before truncation; `0` disables truncation.
    pub label_max_chars: usize,
}

impl Default for RecentlyViewedConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            capacity: DEFAULT_CAPACITY,
            placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
            label_max_chars: DEFAULT_LABEL_MAX_CHARS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogUiConfig {
    pub recently_viewed: RecentlyViewedConfig,
    /// Localized string overrides keyed by message key.
    pub messages: BTreeMap<String, String>,
}

impl CatalogUiConfig {
    /// Parse and validate config JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rv = &self.recently_viewed;
        if rv.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "recently_viewed.storage_key", reason: "must not be empty".to_owned() });
        }
        if rv.capacity == 0 || rv.capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid {
                field: "recently_viewed.capacity",
                reason: format!("must be between 1 and {MAX_CAPACITY}, got {}", rv.capacity),
            });
        }
        if rv.placeholder_rows == 0 {
            return Err(ConfigError::Invalid { field: "recently_viewed.placeholder_rows", reason: "must be at least 1".to_owned() });
        }
        Ok(())
    }

    /// Load the stored override, or defaults.
    pub fn load() -> Self {
        let Some(raw) = local_storage::load_raw(CONFIG_STORAGE_KEY) else {
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("catalog ui config: {e}; using defaults");
            Self::default()
        })
    }

    pub fn messages(&self) -> Messages {
        Messages::with_overrides(self.messages.clone())
    }
}
