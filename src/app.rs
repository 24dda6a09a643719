//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::CatalogUiConfig;
use crate::pages::{entity::EntityPage, my_data::MyDataPage};
use crate::state::layout::WidgetLayout;
use crate::util::entity::ResolverHandle;
#[cfg(not(feature = "hydrate"))]
use crate::util::visit_history::MemoryStore;
use crate::util::visit_history::StoreHandle;
#[cfg(feature = "hydrate")]
use crate::util::visit_history::LocalStorageStore;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session's services (history store, resolver, messages,
/// config) and the My Data layout, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = CatalogUiConfig::load();
    let store = session_store(&config);
    let layout = RwSignal::new(WidgetLayout::default());

    provide_context(config.messages());
    provide_context(config);
    provide_context(store);
    provide_context(ResolverHandle::default());
    provide_context(layout);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-ui.css"/>
        <Title text="Catalog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MyDataPage/>
                <Route path=(ParamSegment("entity_type"), ParamSegment("fqn")) view=EntityPage/>
            </Routes>
        </Router>
    }
}

/// History store for this session: browser storage on the client, an
/// in-process store when rendering on the server or under test.
#[cfg(feature = "hydrate")]
pub fn session_store(config: &CatalogUiConfig) -> StoreHandle {
    StoreHandle::new(LocalStorageStore::new(
        config.recently_viewed.storage_key.clone(),
        config.recently_viewed.capacity,
    ))
}

#[cfg(not(feature = "hydrate"))]
pub fn session_store(config: &CatalogUiConfig) -> StoreHandle {
    StoreHandle::new(MemoryStore::new(config.recently_viewed.capacity))
}
