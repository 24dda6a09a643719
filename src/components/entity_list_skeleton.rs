//! Placeholder rows shown while an entity list is being prepared.

use leptos::prelude::*;

/// Skeleton list with `rows` shimmer rows.
#[component]
pub fn EntityListSkeleton(rows: usize) -> impl IntoView {
    view! {
        <div class="entity-list-skeleton" data-testid="entity-list-skeleton" aria-busy="true">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="entity-list-skeleton__row">
                            <span class="entity-list-skeleton__icon"></span>
                            <span class="entity-list-skeleton__text"></span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
