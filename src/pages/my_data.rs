//! Customizable My Data page hosting dashboard widgets.
//!
//! DESIGN
//! ======
//! The page owns the widget layout and hands each widget its key, the edit
//! flag, and a removal callback. Widgets never remove themselves. Layout
//! changes are written back to `localStorage`; the saved layout is restored
//! after mount so server and first client render agree.

#[cfg(test)]
#[path = "my_data_test.rs"]
mod my_data_test;

use leptos::prelude::*;

use crate::components::recently_viewed::RecentlyViewed;
use crate::state::layout::{LAYOUT_STORAGE_KEY, WidgetKind, WidgetLayout, WidgetSlot};
use crate::util::i18n::{ADD_WIDGET, CUSTOMIZE, DONE, MY_DATA, Messages, NO_WIDGETS};
use crate::util::local_storage;

#[component]
pub fn MyDataPage() -> impl IntoView {
    let layout = expect_context::<RwSignal<WidgetLayout>>();
    let messages = use_context::<Messages>().unwrap_or_default();

    #[cfg(feature = "hydrate")]
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        if let Some(saved) = local_storage::load_json::<WidgetLayout>(LAYOUT_STORAGE_KEY) {
            layout.update(|l| l.widgets = saved.widgets);
        }
    });

    let on_remove_widget = removal_callback(layout);

    let on_add_widget = move |_| {
        layout.update(|l| {
            l.add_widget(WidgetKind::RecentlyViewed);
        });
        local_storage::save_json(LAYOUT_STORAGE_KEY, &layout.get_untracked());
    };

    let on_toggle_edit = move |_| layout.update(WidgetLayout::toggle_edit);

    let edit_mode = move || layout.get().edit_mode;
    let customize_label = messages.localize(CUSTOMIZE);
    let done_label = messages.localize(DONE);
    let add_widget_messages = messages.clone();
    let toggle_label = move || if edit_mode() { done_label.clone() } else { customize_label.clone() };

    view! {
        <div class="my-data-page" class:my-data-page--editing=edit_mode>
            <header class="my-data-page__header">
                <h1>{messages.localize(MY_DATA)}</h1>
                <div class="my-data-page__actions">
                    <Show when=edit_mode>
                        <button class="btn" data-testid="add-widget-button" on:click=on_add_widget>
                            {add_widget_messages.localize(ADD_WIDGET)}
                        </button>
                    </Show>
                    <button class="btn btn--primary" data-testid="customize-button" on:click=on_toggle_edit>
                        {toggle_label}
                    </button>
                </div>
            </header>

            <Show
                when=move || !layout.get().widgets.is_empty()
                fallback={
                    let text = messages.localize(NO_WIDGETS);
                    move || view! { <p class="my-data-page__empty">{text.clone()}</p> }
                }
            >
                <div class="my-data-page__widgets">
                    <For each=move || widget_entries(&layout.get()) key=|(slot, edit)| (slot.key.clone(), *edit) let:entry>
                        {render_widget(entry.0, entry.1, on_remove_widget)}
                    </For>
                </div>
            </Show>
        </div>
    }
}

/// Handler the page passes to each widget's close button.
fn removal_callback(layout: RwSignal<WidgetLayout>) -> Callback<String> {
    Callback::new(move |key: String| {
        let mut removed = false;
        layout.update(|l| removed = remove_requested(l, &key));
        if removed {
            local_storage::save_json(LAYOUT_STORAGE_KEY, &layout.get_untracked());
        } else {
            leptos::logging::warn!("my data: remove requested for unknown widget {key}");
        }
    })
}

/// Drop the widget with `key`. Unknown keys leave the layout untouched.
fn remove_requested(layout: &mut WidgetLayout, key: &str) -> bool {
    layout.contains(key) && layout.remove_widget(key)
}

/// Slots paired with the edit flag so toggling edit mode remounts widgets
/// with the new flag while removals keep the other widgets mounted.
fn widget_entries(layout: &WidgetLayout) -> Vec<(WidgetSlot, bool)> {
    layout.widgets.iter().cloned().map(|slot| (slot, layout.edit_mode)).collect()
}

fn render_widget(slot: WidgetSlot, edit: bool, on_remove_widget: Callback<String>) -> impl IntoView {
    match slot.kind {
        WidgetKind::RecentlyViewed => view! {
            <RecentlyViewed is_edit_view=edit on_remove_widget=on_remove_widget widget_key=slot.key/>
        },
    }
}
