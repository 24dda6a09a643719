//! Recently Viewed dashboard widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the entities the user visited most recently, newest first, as links
//! to their entity pages. The history store, resolver, messages, and config
//! come from Leptos context; the host page supplies edit mode, the widget
//! key, and an optional removal handler.
//!
//! The store is read once, after mount, on the client. Server rendering and
//! the first hydrated frame show the idle widget.

use leptos::prelude::*;

use crate::components::entity_list_skeleton::EntityListSkeleton;
use crate::config::CatalogUiConfig;
use crate::state::recently_viewed::{BodyView, MountGuard, RecentlyViewedState, RowView, body_view, header_view, notify_remove};
use crate::util::entity::ResolverHandle;
use crate::util::i18n::{Messages, NO_RECENTLY_VIEWED_DATA, RECENT_VIEWS};
#[cfg(feature = "hydrate")]
use crate::error::TransitionError;
#[cfg(feature = "hydrate")]
use crate::state::recently_viewed::activate;
#[cfg(feature = "hydrate")]
use crate::util::visit_history::StoreHandle;

#[component]
pub fn RecentlyViewed(
    #[prop(optional)] is_edit_view: bool,
    #[prop(optional)] on_remove_widget: Option<Callback<String>>,
    #[prop(into)] widget_key: String,
) -> impl IntoView {
    let resolver = use_context::<ResolverHandle>().unwrap_or_default();
    let messages = use_context::<Messages>().unwrap_or_default();
    let config = use_context::<CatalogUiConfig>().unwrap_or_default();
    let state = RwSignal::new(RecentlyViewedState::default());
    let guard = MountGuard::new();

    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    #[cfg(feature = "hydrate")]
    {
        let store = expect_context::<StoreHandle>();
        let resolver = resolver.clone();
        let guard = guard.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_some() {
                return;
            }
            let mut local = RecentlyViewedState::default();
            let publish = |s: &RecentlyViewedState| {
                let _ = state.try_set(s.clone());
            };
            match activate(&mut local, store.0.as_ref(), resolver.0.as_ref(), &guard, publish) {
                Ok(()) => {}
                Err(TransitionError::Disposed) => {
                    leptos::logging::log!("recently viewed: widget unmounted, discarding history snapshot");
                }
                Err(e) => leptos::logging::warn!("recently viewed: activation rejected: {e}"),
            }
        });
    }

    let header = header_view(is_edit_view);
    let title = messages.localize(RECENT_VIEWS);
    let empty_text = messages.localize(NO_RECENTLY_VIEWED_DATA);
    let placeholder_rows = config.recently_viewed.placeholder_rows;
    let label_max_chars = config.recently_viewed.label_max_chars;

    let on_close_click = Callback::new({
        let widget_key = widget_key.clone();
        move |()| {
            notify_remove(on_remove_widget.map(|cb| move |key: String| cb.run(key)), &widget_key);
        }
    });

    let body = move || body_view(&state.get(), resolver.0.as_ref(), placeholder_rows, label_max_chars);

    view! {
        <div class="recently-viewed widget-card" data-testid="recently-viewed-container" data-widget-key=widget_key>
            <div class="recently-viewed__header">
                <p class="recently-viewed__title right-panel-label">{title}</p>
                <Show when=move || header.show_drag_handle || header.show_close>
                    <div class="recently-viewed__actions">
                        <Show when=move || header.show_drag_handle>
                            <span class="drag-widget-icon" data-testid="drag-widget-button" aria-hidden="true">
                                "\u{2725}"
                            </span>
                        </Show>
                        <Show when=move || header.show_close>
                            <button
                                class="recently-viewed__close"
                                data-testid="remove-widget-button"
                                title="Remove widget"
                                aria-label="Remove widget"
                                on:click=move |_| on_close_click.run(())
                            >
                                "\u{2715}"
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
            {move || match body() {
                BodyView::Skeleton { rows } => view! { <EntityListSkeleton rows=rows/> }.into_any(),
                BodyView::Rows(rows) => {
                    view! {
                        <div class="entity-list-body">
                            <For each=move || rows.clone() key=|row| row.key.clone() let:row>
                                <RecentlyViewedRow row=row/>
                            </For>
                        </div>
                    }
                        .into_any()
                }
                BodyView::Empty => {
                    view! {
                        <div class="entity-list-body entity-list-body--empty" data-testid="no-recently-viewed">
                            {empty_text.clone()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One navigable row: icon plus truncated label, full name on hover.
#[component]
fn RecentlyViewedRow(row: RowView) -> impl IntoView {
    let RowView { href, icon, label, title, test_id, .. } = row;
    let link_title = title.clone();

    view! {
        <div class="right-panel-list-item" data-testid=test_id>
            <a class="entity-button" href=href title=link_title>
                <span class=icon.class title=icon.label aria-hidden="true">
                    {icon.glyph}
                </span>
                <span class="entity-button__label text-ellipsis" title=title>
                    {label}
                </span>
            </a>
        </div>
    }
}
