//! Application shell, context wiring, and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is what the server renders around the app. `App` provides the
//! shared state (content snapshot, session, notices) and, once mounted in
//! the browser, refreshes content from `localStorage` and restores the
//! admin session. Public routes carry the navbar; admin routes do not.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::notice_toasts::NoticeToasts;
use crate::pages::admin::{AdminLoginPage, AdminPage};
use crate::pages::benefits::BenefitsPage;
use crate::pages::herbs::HerbsPage;
use crate::pages::home::HomePage;
use crate::pages::recipes::RecipesPage;
use crate::state::content_hub::ContentHub;
use crate::state::notices::NoticeState;
use crate::state::session::SessionHub;

/// HTML document rendered by the server for every route.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let hub = ContentHub::new();
    let session = SessionHub::new();
    provide_context(hub);
    provide_context(session);
    provide_context(RwSignal::new(NoticeState::default()));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        hub.refresh();
        session.restore();
    });

    view! {
        <Stylesheet id="natura" href="/pkg/natura.css"/>
        <Title text="Natura Revista"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada."</p> }>
                    <Route path=path!("/") view=|| view! { <Navbar/> <HomePage/> }/>
                    <Route path=path!("/hierbas") view=|| view! { <Navbar/> <HerbsPage/> }/>
                    <Route path=path!("/recetas") view=|| view! { <Navbar/> <RecipesPage/> }/>
                    <Route path=path!("/beneficios") view=|| view! { <Navbar/> <BenefitsPage/> }/>
                    <Route path=path!("/admin") view=AdminPage/>
                    <Route path=path!("/admin/login") view=AdminLoginPage/>
                </Routes>
            </main>
            <NoticeToasts/>
        </Router>
    }
}
