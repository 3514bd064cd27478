//! Herb directory with name search and benefit filter.

use content::Herb;
use content::directory::{HerbQuery, distinct_benefits};
use leptos::prelude::*;

use crate::state::content_hub::ContentHub;

#[component]
pub fn HerbsPage() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let query = RwSignal::new(HerbQuery::default());

    let benefits = move || snapshot.with(|s| distinct_benefits(&s.herbs));
    let matches = move || {
        query.with(|q| snapshot.with(|s| q.apply(&s.herbs).into_iter().cloned().collect::<Vec<Herb>>()))
    };

    view! {
        <div class="herbs-page">
            <header class="page-header">
                <h1>"Directorio de Hierbas"</h1>
                <p>"Descubre las propiedades curativas de las plantas medicinales más utilizadas"</p>
            </header>
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Buscar hierbas por nombre o nombre científico..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <select
                    class="filters__benefit"
                    on:change=move |ev| query.update(|q| q.benefit = event_target_value(&ev))
                >
                    <option value="">"Todos los beneficios"</option>
                    {move || {
                        benefits()
                            .into_iter()
                            .map(|b| view! { <option value=b.clone()>{b.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            {move || {
                let herbs = matches();
                if herbs.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No se encontraron hierbas"</h3>
                            <p>"Intenta con otros términos de búsqueda o filtros"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="card-grid">
                        {herbs.into_iter().map(|herb| view! { <HerbCard herb=herb/> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn HerbCard(herb: Herb) -> impl IntoView {
    let has_precautions = !herb.precautions.trim().is_empty();
    view! {
        <article class="card herb-card">
            <img class="card__image" src=herb.image alt=herb.name.clone()/>
            <div class="card__body">
                <h3>{herb.name}</h3>
                <p class="herb-card__scientific">{herb.scientific_name}</p>
                <p>{herb.description}</p>
                <div class="badge-row">
                    {herb.benefits.into_iter().map(|b| view! { <span class="badge">{b}</span> }).collect_view()}
                </div>
                <h4>"Usos"</h4>
                <p>{herb.uses}</p>
                <Show when=move || has_precautions>
                    <p class="herb-card__precautions">"⚠ " {herb.precautions.clone()}</p>
                </Show>
            </div>
        </article>
    }
}
