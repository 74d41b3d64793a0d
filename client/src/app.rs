//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::dialog_host::DialogHost;
use crate::components::notice_bar::NoticeBar;
use crate::pages::{admin::AdminPage, product::ProductPage, storefront::StorefrontPage};
use crate::state::cart::CartCount;
use crate::state::notice::NoticeState;
use crate::util::dialog::DialogHandle;

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
/// Provides the notice, dialog and cart contexts shared by every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(NoticeState::default()));
    provide_context(RwSignal::new(CartCount::default()));
    provide_context(DialogHandle::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-console.css"/>
        <Title text="Catalog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StorefrontPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
            </Routes>
        </Router>
        <NoticeBar/>
        <DialogHost/>
    }
}
