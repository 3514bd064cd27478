//! Dashboard landing tab: collection counts and shortcuts.

use content::directory::ContentStats;
use leptos::prelude::*;

use crate::pages::admin::AdminTab;
use crate::state::content_hub::ContentHub;

#[component]
pub fn Overview(tab: RwSignal<AdminTab>) -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let stats = move || snapshot.with(ContentStats::from_snapshot);

    let card = move |label: &'static str, count: fn(&ContentStats) -> usize, target: AdminTab| {
        view! {
            <button class="stat-card" type="button" on:click=move |_| tab.set(target)>
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || count(&stats())}</span>
            </button>
        }
    };

    view! {
        <section class="admin-overview">
            <h2>"Bienvenido al Panel de Administración"</h2>
            <p>"Gestiona todo el contenido de tu revista virtual desde aquí."</p>
            <div class="admin-overview__stats">
                {card("Hierbas", |s| s.herbs, AdminTab::Herbs)}
                {card("Recetas", |s| s.recipes, AdminTab::Recipes)}
                {card("Categorías de beneficios", |s| s.benefits, AdminTab::Benefits)}
                {card("Páginas de revista", |s| s.magazine_pages, AdminTab::Magazine)}
            </div>
            <div class="admin-overview__actions">
                <button class="btn" type="button" on:click=move |_| tab.set(AdminTab::Home)>
                    "Editar página principal"
                </button>
                <a class="btn" href="/">"Ver sitio"</a>
            </div>
        </section>
    }
}
