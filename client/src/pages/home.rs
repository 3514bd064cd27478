//! Landing page: hero, magazine carousel, and section shortcuts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::magazine_flip::MagazineFlip;
use crate::state::content_hub::ContentHub;

const SECTIONS: [(&str, &str, &str); 3] = [
    (
        "/hierbas",
        "Directorio de Hierbas",
        "Explora nuestra extensa colección de plantas medicinales con información detallada sobre cada una.",
    ),
    (
        "/recetas",
        "Recetas Naturales",
        "Descubre preparaciones tradicionales y modernas para aprovechar el poder curativo de la naturaleza.",
    ),
    (
        "/beneficios",
        "Beneficios y Propiedades",
        "Conoce las propiedades medicinales y beneficios respaldados por la sabiduría ancestral.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let home = move |read: fn(&content::HomeContent) -> String| move || snapshot.with(|s| read(&s.home));

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">
                    {home(|h| h.title.clone())}
                    <span class="hero__subtitle">{home(|h| h.subtitle.clone())}</span>
                </h1>
                <p class="hero__description">{home(|h| h.description.clone())}</p>
                <A href="/hierbas" attr:class="btn btn--primary hero__cta">
                    {home(|h| h.button_text.clone())}
                    " ›"
                </A>
            </section>

            <section class="home-page__magazine" id="revista">
                <h2>{home(|h| h.hero_title.clone())}</h2>
                <p>{home(|h| h.hero_subtitle.clone())}</p>
                <MagazineFlip/>
            </section>

            <section class="home-page__sections">
                <h2>"Explora Nuestras Secciones"</h2>
                <p>"Todo lo que necesitas saber sobre hierbas curativas"</p>
                <div class="card-grid">
                    {SECTIONS
                        .iter()
                        .map(|&(href, title, description)| {
                            view! {
                                <article class="card card--section">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                    <A href=href attr:class="btn btn--outline">"Explorar ›"</A>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer class="site-footer">
                <span class="site-footer__brand">{move || snapshot.with(|s| format!("{} {}", s.home.title, s.home.subtitle))}</span>
                <p>"Conectando con la sabiduría ancestral de las plantas medicinales"</p>
            </footer>
        </div>
    }
}
