//! Recently-visited entity history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entity pages append a visit when they mount; the Recently Viewed widget
//! reads a snapshot. The store owns ordering and length policy: one entry
//! per FQN, newest first, capped at `capacity`.
//!
//! DESIGN
//! ======
//! The store is injected through Leptos context as a [`StoreHandle`] rather
//! than reached through a module-level global, so tests and SSR can swap in
//! a [`MemoryStore`].

#[cfg(test)]
#[path = "visit_history_test.rs"]
mod visit_history_test;

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::util::local_storage;

pub const DEFAULT_STORAGE_KEY: &str = "recentlyViewedData";
pub const DEFAULT_CAPACITY: usize = 8;

/// One visited catalog entity, as persisted by the history store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedEntityRecord {
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub fqn: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// Persisted envelope: `{ "data": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEnvelope {
    #[serde(default)]
    pub data: Vec<VisitedEntityRecord>,
}

/// Read access to the visit history, plus the append used by navigation.
pub trait RecentlyViewedStore: Send + Sync {
    /// Current snapshot, newest first.
    fn read(&self) -> Vec<VisitedEntityRecord>;

    /// Record a visit, applying the store's dedupe and length policy.
    fn record_visit(&self, visit: VisitedEntityRecord);
}

/// Context handle for the session's history store.
#[derive(Clone)]
pub struct StoreHandle(pub Arc<dyn RecentlyViewedStore>);

impl StoreHandle {
    pub fn new(store: impl RecentlyViewedStore + 'static) -> Self {
        Self(Arc::new(store))
    }
}

/// Apply a visit to `history`: drop older entries for the same FQN, order
/// by timestamp descending, put the visit first, and cap the length.
pub fn push_visit(history: &mut Vec<VisitedEntityRecord>, visit: VisitedEntityRecord, capacity: usize) {
    history.retain(|r| r.fqn != visit.fqn);
    history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    history.insert(0, visit);
    history.truncate(capacity.max(1));
}

/// Decode a persisted history envelope.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if `raw` is not a valid envelope.
pub fn decode_history(raw: &str) -> Result<Vec<VisitedEntityRecord>, StoreError> {
    serde_json::from_str::<HistoryEnvelope>(raw)
        .map(|env| env.data)
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// Encode a history for persistence.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode_history(data: &[VisitedEntityRecord]) -> Result<String, StoreError> {
    let envelope = HistoryEnvelope { data: data.to_vec() };
    serde_json::to_string(&envelope).map_err(|e| StoreError::Encode(e.to_string()))
}

/// In-process history. Backs the session store outside the browser.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<Vec<VisitedEntityRecord>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self { records: RwLock::new(Vec::new()), capacity }
    }

    /// Seed with a fixed snapshot, kept in the given order.
    pub fn with_records(records: Vec<VisitedEntityRecord>) -> Self {
        let capacity = records.len().max(DEFAULT_CAPACITY);
        Self { records: RwLock::new(records), capacity }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecentlyViewedStore for MemoryStore {
    fn read(&self) -> Vec<VisitedEntityRecord> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }

    fn record_visit(&self, visit: VisitedEntityRecord) {
        if let Ok(mut records) = self.records.write() {
            push_visit(&mut records, visit, self.capacity);
        }
    }
}

/// History persisted in browser `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
    capacity: usize,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>, capacity: usize) -> Self {
        Self { key: key.into(), capacity }
    }

    fn load(&self) -> Vec<VisitedEntityRecord> {
        let Some(raw) = local_storage::load_raw(&self.key) else {
            return Vec::new();
        };
        decode_history(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("recently viewed: {e}; treating history as empty");
            Vec::new()
        })
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY, DEFAULT_CAPACITY)
    }
}

impl RecentlyViewedStore for LocalStorageStore {
    fn read(&self) -> Vec<VisitedEntityRecord> {
        self.load()
    }

    fn record_visit(&self, visit: VisitedEntityRecord) {
        let mut history = self.load();
        push_visit(&mut history, visit, self.capacity);
        match encode_history(&history) {
            Ok(raw) => local_storage::save_raw(&self.key, &raw),
            Err(e) => leptos::logging::warn!("recently viewed: {e}"),
        }
    }
}
