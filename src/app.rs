//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::back_to_top::BackToTop;
use crate::pages::contact::ContactPage;
use crate::state::submission::ContactFormState;
use crate::util::scroll::ScrollLockCoordinator;

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
/// Provides the contact form state machine and the scroll-lock coordinator
/// as contexts, then mounts the routes and the floating back-to-top button.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = RwSignal::new(ContactFormState::new());
    provide_context(form);
    provide_context(ScrollLockCoordinator::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-web.css"/>
        <Title text="Contact Us"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ContactPage/>
            </Routes>
        </Router>

        <BackToTop/>
    }
}
