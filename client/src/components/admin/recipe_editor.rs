//! Recipe editor. Ingredients and steps are edited one per line.

use content::directory::difficulty_class;
use content::{Difficulty, Recipe, RecipeForm, RecordId};
use leptos::prelude::*;

use super::{close_if_editing, heading, submit_label};
use crate::components::form_fields::{FieldSpec, Session, image_input, text_area, text_input};
use crate::state::editors::{Feedback, open_editor};

#[component]
pub fn RecipeEditor() -> impl IntoView {
    let feedback = Feedback::from_context();
    let editor = RwSignal::new(open_editor::<Recipe>());
    let session: Session<RecipeForm> = RwSignal::new(None);

    let on_create = move |_| session.set(Some(editor.with_untracked(|e| e.open_create())));
    let on_edit = move |id: RecordId| session.set(editor.with_untracked(|e| e.open_edit(id)));
    let on_delete = move |id: RecordId| {
        if feedback.apply(editor, |e| e.delete(id).map(Some)) {
            close_if_editing(session, id);
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = session.get_untracked() else {
            return;
        };
        if feedback.apply(editor, |e| e.save(&current).map(|saved| Some(saved.notice))) {
            session.set(None);
        }
    };

    let rows = move || {
        editor.with(|e| {
            e.records()
                .iter()
                .map(|recipe| {
                    let id = recipe.id;
                    view! {
                        <li class="admin-list__item">
                            <img class="admin-list__thumb" src=recipe.image.clone() alt=recipe.name.clone()/>
                            <div class="admin-list__body">
                                <strong>{recipe.name.clone()}</strong>
                                <span class=format!("badge {}", difficulty_class(&recipe.difficulty))>
                                    {recipe.difficulty.label().to_owned()}
                                </span>
                                <span class="admin-list__meta">{recipe.time.clone()}</span>
                            </div>
                            <div class="admin-list__actions">
                                <button class="btn" type="button" on:click=move |_| on_edit(id)>"Editar"</button>
                                <button class="btn btn--danger" type="button" on:click=move |_| on_delete(id)>
                                    "Eliminar"
                                </button>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="admin-editor">
            <header class="admin-editor__header">
                <h2>"Gestionar Recetas"</h2>
                <button class="btn btn--primary" type="button" on:click=on_create>"+ Agregar Receta"</button>
            </header>
            <Show when=move || session.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <h3>{heading(session, "Nueva Receta", "Editar Receta")}</h3>
                    {text_input(
                        FieldSpec::required("Nombre", "Ej: Té Relajante de Manzanilla"),
                        session,
                        |f| f.name.clone(),
                        |f, v| f.name = v,
                    )}
                    {text_input(
                        FieldSpec::required("Tiempo", "Ej: 10 minutos"),
                        session,
                        |f| f.time.clone(),
                        |f, v| f.time = v,
                    )}
                    <DifficultySelect session=session/>
                    {image_input(session, |f| f.image.clone(), |f, v| f.image = v)}
                    {text_area(
                        FieldSpec::required("Beneficios", "Describe los beneficios de esta receta..."),
                        session,
                        |f| f.benefits.clone(),
                        |f, v| f.benefits = v,
                    )}
                    {text_area(
                        FieldSpec::required("Ingredientes", "2 cucharaditas de flores secas de manzanilla")
                            .with_hint("Uno por línea"),
                        session,
                        |f| f.ingredients.clone(),
                        |f, v| f.ingredients = v,
                    )}
                    {text_area(
                        FieldSpec::required("Instrucciones", "Hierve el agua y deja enfriar por 2 minutos")
                            .with_hint("Un paso por línea"),
                        session,
                        |f| f.instructions.clone(),
                        |f, v| f.instructions = v,
                    )}
                    <div class="admin-form__actions">
                        <button class="btn" type="button" on:click=move |_| session.set(None)>"Cancelar"</button>
                        <button class="btn btn--primary" type="submit">{submit_label(session)}</button>
                    </div>
                </form>
            </Show>
            <ul class="admin-list">{rows}</ul>
        </section>
    }
}

/// Difficulty picker. A stored label outside the three known levels is
/// offered as an extra option so editing does not silently change it.
#[component]
fn DifficultySelect(session: Session<RecipeForm>) -> impl IntoView {
    let current = move || session.with(|s| s.as_ref().map(|s| s.form().difficulty.clone()).unwrap_or_default());
    let options = move || {
        let selected = current();
        let mut levels = Difficulty::ALL.to_vec();
        if !levels.contains(&selected) {
            levels.push(selected.clone());
        }
        levels
            .into_iter()
            .map(|level| {
                let label = level.label().to_owned();
                view! { <option value=label.clone() selected=level == selected>{label.clone()}</option> }
            })
            .collect_view()
    };

    view! {
        <label class="field">
            <span class="field__label">"Dificultad"</span>
            <select
                class="field__select"
                required=true
                on:change=move |ev| {
                    let level = Difficulty::from(event_target_value(&ev));
                    session.update(|s| {
                        if let Some(s) = s {
                            s.form_mut().difficulty = level;
                        }
                    });
                }
            >
                {options}
            </select>
        </label>
    }
}
