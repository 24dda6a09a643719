//! Recently Viewed widget state: projection and lifecycle.
//!
//! DESIGN
//! ======
//! Each mounted widget owns one `RecentlyViewedState`. Activation reads the
//! history store once and walks `Idle -> Loading -> Loaded`; there is no way
//! back to `Loading` without a new mount. The loading phase is kept explicit
//! even though the current store read is synchronous, so an async store can
//! slot in behind the same transitions. Unmount moves the state to
//! `Disposed`, after which every transition is rejected.

#[cfg(test)]
#[path = "recently_viewed_test.rs"]
mod recently_viewed_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::TransitionError;
use crate::util::entity::{EntityIcon, EntityResolver, display_label};
use crate::util::visit_history::{RecentlyViewedStore, VisitedEntityRecord};

/// One row of the widget, derived from a visit record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayItem {
    pub service_type: Option<String>,
    pub name: String,
    pub fully_qualified_name: String,
    pub entity_type: String,
    pub id: String,
}

/// Map visit records to display items and drop those without a label.
///
/// `display_name` wins when non-empty; otherwise the resolver synthesizes a
/// label from `(entity_type, fqn)`. Store order is preserved.
pub fn project(records: &[VisitedEntityRecord], resolver: &dyn EntityResolver) -> Vec<DisplayItem> {
    records
        .iter()
        .map(|r| {
            let name = match r.display_name.as_deref() {
                Some(name) if !name.is_empty() => name.to_owned(),
                _ => resolver.label_for(&r.entity_type, &r.fqn),
            };
            DisplayItem {
                service_type: r.service_type.clone(),
                name,
                fully_qualified_name: r.fqn.clone(),
                entity_type: r.entity_type.clone(),
                id: r.id.clone(),
            }
        })
        .filter(|item| !item.name.is_empty())
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Disposed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentlyViewedState {
    pub phase: WidgetPhase,
    pub items: Vec<DisplayItem>,
    activated: bool,
}

impl RecentlyViewedState {
    pub fn is_loading(&self) -> bool {
        self.phase == WidgetPhase::Loading
    }

    /// Start activation for a snapshot of `record_count` records.
    ///
    /// Returns `true` if the widget entered `Loading` and a projection must
    /// follow. An empty snapshot leaves the widget idle with no items.
    ///
    /// # Errors
    ///
    /// Rejects a second activation and any activation after disposal.
    pub fn begin(&mut self, record_count: usize) -> Result<bool, TransitionError> {
        if self.phase == WidgetPhase::Disposed {
            return Err(TransitionError::Disposed);
        }
        if self.activated {
            return Err(TransitionError::AlreadyActivated);
        }
        self.activated = true;
        if record_count == 0 {
            return Ok(false);
        }
        self.phase = WidgetPhase::Loading;
        Ok(true)
    }

    /// Store the projected items and leave `Loading`.
    ///
    /// # Errors
    ///
    /// Rejects results for a disposed widget or one that is not loading.
    pub fn finish(&mut self, items: Vec<DisplayItem>) -> Result<(), TransitionError> {
        match self.phase {
            WidgetPhase::Disposed => Err(TransitionError::Disposed),
            WidgetPhase::Loading => {
                self.items = items;
                self.phase = WidgetPhase::Loaded;
                Ok(())
            }
            WidgetPhase::Idle | WidgetPhase::Loaded => Err(TransitionError::NotLoading),
        }
    }

    /// Terminal transition on unmount.
    pub fn dispose(&mut self) {
        self.phase = WidgetPhase::Disposed;
        self.items.clear();
    }

    /// Skeleton row count: the current item count, or `default_rows` when empty.
    pub fn skeleton_rows(&self, default_rows: usize) -> usize {
        if self.items.is_empty() { default_rows } else { self.items.len() }
    }
}

/// Run the one-shot activation for a mounted widget.
///
/// `publish` sees every intermediate state, so a non-empty snapshot is
/// published once while loading and once loaded; an empty snapshot publishes
/// nothing. If `guard` is released before a step completes, the state is
/// disposed and the step is rejected without publishing.
///
/// # Errors
///
/// Propagates [`TransitionError`] from the state machine, including
/// [`TransitionError::Disposed`] when the widget unmounted mid-activation.
pub fn activate(
    state: &mut RecentlyViewedState,
    store: &dyn RecentlyViewedStore,
    resolver: &dyn EntityResolver,
    guard: &MountGuard,
    mut publish: impl FnMut(&RecentlyViewedState),
) -> Result<(), TransitionError> {
    let records = store.read();
    dispose_if_released(state, guard);
    if !state.begin(records.len())? {
        return Ok(());
    }
    publish(state);
    let items = project(&records, resolver);
    dispose_if_released(state, guard);
    state.finish(items)?;
    publish(state);
    Ok(())
}

fn dispose_if_released(state: &mut RecentlyViewedState, guard: &MountGuard) {
    if !guard.is_live() {
        state.dispose();
    }
}

/// Liveness flag shared between a mounted widget and its pending work.
///
/// Cleared on unmount; results arriving afterwards must be dropped.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Invoke the host's removal handler, if any. Returns whether it ran.
pub fn notify_remove(handler: Option<impl Fn(String)>, widget_key: &str) -> bool {
    match handler {
        Some(handler) => {
            handler(widget_key.to_owned());
            true
        }
        None => false,
    }
}

/// Header-row model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub show_drag_handle: bool,
    pub show_close: bool,
}

pub fn header_view(is_edit_view: bool) -> HeaderView {
    HeaderView { show_drag_handle: is_edit_view, show_close: is_edit_view }
}

/// One rendered list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub key: String,
    pub href: String,
    pub icon: EntityIcon,
    pub label: String,
    pub title: String,
    pub test_id: String,
}

/// Body model: skeleton while loading, rows when loaded, or the empty state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyView {
    Skeleton { rows: usize },
    Rows(Vec<RowView>),
    Empty,
}

pub fn body_view(
    state: &RecentlyViewedState,
    resolver: &dyn EntityResolver,
    placeholder_rows: usize,
    label_max_chars: usize,
) -> BodyView {
    if state.is_loading() {
        return BodyView::Skeleton { rows: state.skeleton_rows(placeholder_rows) };
    }
    if state.items.is_empty() {
        return BodyView::Empty;
    }
    let rows = state
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| RowView {
            key: if item.id.is_empty() { format!("{idx}:{}", item.fully_qualified_name) } else { item.id.clone() },
            href: resolver.link_for(&item.entity_type, &item.fully_qualified_name),
            icon: resolver.icon_for(&item.entity_type),
            label: display_label(&item.name, label_max_chars),
            title: item.name.clone(),
            test_id: format!("Recently Viewed-{}", item.name),
        })
        .collect();
    BodyView::Rows(rows)
}
