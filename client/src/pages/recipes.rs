//! Recipe list with a detail view for the selected recipe.

use content::directory::difficulty_class;
use content::{Recipe, RecordId};
use leptos::prelude::*;

use crate::state::content_hub::ContentHub;

#[component]
pub fn RecipesPage() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let selected = RwSignal::new(None::<RecordId>);

    let selected_recipe =
        move || selected.get().and_then(|id| snapshot.with(|s| s.recipes.iter().find(|r| r.id == id).cloned()));

    view! {
        <div class="recipes-page">
            <header class="page-header">
                <h1>"Recetas Naturales"</h1>
                <p>"Descubre preparaciones tradicionales y modernas para aprovechar el poder curativo de las plantas"</p>
            </header>
            {move || match selected_recipe() {
                Some(recipe) => view! { <RecipeDetail recipe=recipe on_back=Callback::new(move |()| selected.set(None))/> }.into_any(),
                None => {
                    let recipes = snapshot.with(|s| s.recipes.clone());
                    view! {
                        <div class="card-grid">
                            {recipes
                                .into_iter()
                                .map(|recipe| {
                                    let id = recipe.id;
                                    view! {
                                        <article class="card recipe-card" on:click=move |_| selected.set(Some(id))>
                                            <img class="card__image" src=recipe.image alt=recipe.name.clone()/>
                                            <div class="card__body">
                                                <h3>{recipe.name}</h3>
                                                <div class="recipe-card__meta">
                                                    <span class="recipe-card__time">"⏱ " {recipe.time}</span>
                                                    <span class=format!("badge {}", difficulty_class(&recipe.difficulty))>
                                                        {recipe.difficulty.label().to_owned()}
                                                    </span>
                                                </div>
                                                <p>{recipe.benefits}</p>
                                                <button class="btn btn--outline" type="button">"Ver Receta"</button>
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
            <section class="tips">
                <h2>"Consejos para Preparaciones Herbales"</h2>
                <div class="tips__grid">
                    <div>
                        <h4>"Calidad de Ingredientes"</h4>
                        <p>"Utiliza siempre hierbas frescas o secas de alta calidad para obtener mejores resultados."</p>
                    </div>
                    <div>
                        <h4>"Tiempos de Infusión"</h4>
                        <p>"Respeta los tiempos recomendados para extraer todas las propiedades medicinales."</p>
                    </div>
                    <div>
                        <h4>"Almacenamiento"</h4>
                        <p>"Guarda las preparaciones en recipientes de vidrio oscuro para preservar sus propiedades."</p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn RecipeDetail(recipe: Recipe, on_back: Callback<()>) -> impl IntoView {
    view! {
        <article class="recipe-detail">
            <button class="btn btn--ghost" type="button" on:click=move |_| on_back.run(())>"‹ Volver a recetas"</button>
            <div class="recipe-detail__hero">
                <img src=recipe.image alt=recipe.name.clone()/>
                <h1>{recipe.name}</h1>
                <span class="recipe-detail__time">"⏱ " {recipe.time}</span>
                <span class=format!("badge {}", difficulty_class(&recipe.difficulty))>
                    {recipe.difficulty.label().to_owned()}
                </span>
            </div>
            <h3>"Beneficios"</h3>
            <p>{recipe.benefits}</p>
            <div class="recipe-detail__columns">
                <div>
                    <h3>"Ingredientes"</h3>
                    <ul>{recipe.ingredients.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}</ul>
                </div>
                <div>
                    <h3>"Preparación"</h3>
                    <ol>{recipe.instructions.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}</ol>
                </div>
            </div>
        </article>
    }
}
