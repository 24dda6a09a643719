//! Entity detail page, the navigation target of Recently Viewed rows.
//!
//! Mounting the page (or changing its route params) records a visit in the
//! history store, which is what feeds the Recently Viewed widget.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::entity::ResolverHandle;
use crate::util::i18n::{BACK_TO_MY_DATA, Messages};
use crate::util::local_storage;
use crate::util::visit_history::{StoreHandle, VisitedEntityRecord};

/// Entity page for `/:entity_type/:fqn`.
#[component]
pub fn EntityPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let resolver = use_context::<ResolverHandle>().unwrap_or_default();
    let messages = use_context::<Messages>().unwrap_or_default();
    let params = use_params_map();

    // The router hands params back already percent-decoded.
    let entity_type = move || params.read().get("entity_type").unwrap_or_default();
    let fqn = move || params.read().get("fqn").unwrap_or_default();

    Effect::new(move || {
        let Some(visit) = build_visit(&entity_type(), &fqn(), local_storage::now_ms()) else {
            return;
        };
        store.0.record_visit(visit);
    });

    let heading = {
        let resolver = resolver.clone();
        move || heading_for(&resolver, &entity_type(), &fqn())
    };
    let icon = Memo::new(move |_| resolver.0.icon_for(&entity_type()));

    view! {
        <div class="entity-page">
            <a class="entity-page__back" href="/">
                {messages.localize(BACK_TO_MY_DATA)}
            </a>
            <header class="entity-page__header">
                <span class=move || icon.get().class aria-hidden="true">
                    {move || icon.get().glyph}
                </span>
                <h1 class="entity-page__title">{heading}</h1>
            </header>
            <p class="entity-page__fqn" data-testid="entity-fqn">{fqn}</p>
        </div>
    }
}

/// Visit record for a page view. `None` when there is nothing to record.
pub fn build_visit(entity_type: &str, fqn: &str, timestamp: i64) -> Option<VisitedEntityRecord> {
    if entity_type.is_empty() || fqn.is_empty() {
        return None;
    }
    Some(VisitedEntityRecord {
        entity_type: entity_type.to_owned(),
        fqn: fqn.to_owned(),
        display_name: None,
        service_type: None,
        id: fqn.to_owned(),
        timestamp,
    })
}

/// Page heading: the resolved label, or the raw FQN when there is none.
fn heading_for(resolver: &ResolverHandle, entity_type: &str, fqn: &str) -> String {
    let label = resolver.0.label_for(entity_type, fqn);
    if label.is_empty() { fqn.to_owned() } else { label }
}
