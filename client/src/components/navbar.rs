//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::content_hub::ContentHub;

const NAV_ITEMS: [(&str, &str); 4] =
    [("/", "Inicio"), ("/hierbas", "Directorio"), ("/recetas", "Recetas"), ("/beneficios", "Beneficios")];

#[component]
pub fn Navbar() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let menu_open = RwSignal::new(false);
    let brand = move || snapshot.with(|s| format!("{} {}", s.home.title, s.home.subtitle));

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <A href=href attr:class="navbar__link" on:click=move |_| menu_open.set(false)>
                        {label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"🌿"</span>
                    <span class="navbar__title">{brand}</span>
                </A>
                <div class="navbar__links">
                    {links}
                    <A href="/admin" attr:class="navbar__link navbar__link--admin">"Admin"</A>
                </div>
                <button
                    class="navbar__menu-toggle"
                    type="button"
                    aria-label="Menú"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {links}
                    <A href="/admin" attr:class="navbar__link navbar__link--admin">"Admin"</A>
                </div>
            </Show>
        </nav>
    }
}
