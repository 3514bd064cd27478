//! Benefit categories with a detail view for the selected one.

use content::{BenefitCategory, RecordId};
use leptos::prelude::*;

use crate::state::content_hub::ContentHub;

#[component]
pub fn BenefitsPage() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let selected = RwSignal::new(None::<RecordId>);

    let selected_category =
        move || selected.get().and_then(|id| snapshot.with(|s| s.benefits.iter().find(|b| b.id == id).cloned()));

    view! {
        <div class="benefits-page">
            <header class="page-header">
                <h1>"Beneficios y Propiedades"</h1>
                <p>"Descubre cómo las plantas medicinales pueden beneficiar diferentes sistemas de tu cuerpo"</p>
            </header>
            {move || match selected_category() {
                Some(category) => view! {
                    <CategoryDetail category=category on_back=Callback::new(move |()| selected.set(None))/>
                }
                .into_any(),
                None => {
                    let categories = snapshot.with(|s| s.benefits.clone());
                    view! {
                        <div class="card-grid">
                            {categories
                                .into_iter()
                                .map(|category| {
                                    let id = category.id;
                                    view! {
                                        <article class="card benefit-card" on:click=move |_| selected.set(Some(id))>
                                            <img class="card__image" src=category.image alt=category.category.clone()/>
                                            <div class="card__body">
                                                <h3>{category.category}</h3>
                                                <p>{category.description}</p>
                                                <div class="badge-row">
                                                    {category
                                                        .herbs
                                                        .into_iter()
                                                        .map(|h| view! { <span class="badge">{h}</span> })
                                                        .collect_view()}
                                                </div>
                                                <button class="btn btn--outline" type="button">"Ver detalles"</button>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
            <section class="facts">
                <h2>"¿Sabías que...?"</h2>
                <p>
                    "Las plantas medicinales han sido utilizadas durante más de 5,000 años y siguen siendo la base de muchos medicamentos modernos."
                </p>
                <div class="facts__grid">
                    <div><strong>"5,000+"</strong><p>"Años de uso tradicional"</p></div>
                    <div><strong>"80%"</strong><p>"Población mundial las usa"</p></div>
                    <div><strong>"40%"</strong><p>"Medicamentos provienen de plantas"</p></div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn CategoryDetail(category: BenefitCategory, on_back: Callback<()>) -> impl IntoView {
    view! {
        <article class="benefit-detail">
            <button class="btn btn--ghost" type="button" on:click=move |_| on_back.run(())>"‹ Volver a categorías"</button>
            <div class="benefit-detail__hero">
                <img src=category.image alt=category.category.clone()/>
                <h1>{category.category}</h1>
            </div>
            <p class="benefit-detail__description">{category.description}</p>
            <div class="benefit-detail__columns">
                <div>
                    <h3>"Hierbas recomendadas"</h3>
                    <ul>{category.herbs.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}</ul>
                </div>
                <div>
                    <h3>"Síntomas que alivia"</h3>
                    <ul>{category.symptoms.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}</ul>
                </div>
            </div>
        </article>
    }
}
