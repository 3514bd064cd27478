//! Benefit category editor.

use content::defaults::CATEGORY_SUGGESTIONS;
use content::{BenefitCategory, BenefitForm, RecordId};
use leptos::prelude::*;

use super::{close_if_editing, heading, submit_label};
use crate::components::form_fields::{FieldSpec, Session, image_input, text_area, text_input};
use crate::state::editors::{Feedback, open_editor};

#[component]
pub fn BenefitEditor() -> impl IntoView {
    let feedback = Feedback::from_context();
    let editor = RwSignal::new(open_editor::<BenefitCategory>());
    let session: Session<BenefitForm> = RwSignal::new(None);

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
                .map(|category| {
                    let id = category.id;
                    view! {
                        <li class="admin-list__item">
                            <img class="admin-list__thumb" src=category.image.clone() alt=category.category.clone()/>
                            <div class="admin-list__body">
                                <strong>{category.category.clone()}</strong>
                                <span class="admin-list__meta">{category.herbs.join(", ")}</span>
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
                <h2>"Gestionar Beneficios"</h2>
                <button class="btn btn--primary" type="button" on:click=on_create>"+ Agregar Categoría"</button>
            </header>
            <Show when=move || session.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <h3>{heading(session, "Nueva Categoría", "Editar Categoría")}</h3>
                    <datalist id="benefit-category-suggestions">
                        {CATEGORY_SUGGESTIONS.iter().map(|name| view! { <option value=*name></option> }).collect_view()}
                    </datalist>
                    <label class="field">
                        <span class="field__label">"Categoría"</span>
                        <input
                            class="field__input"
                            type="text"
                            list="benefit-category-suggestions"
                            placeholder="Ej: Sistema Digestivo"
                            required=true
                            prop:value=move || {
                                session.with(|s| s.as_ref().map(|s| s.form().category.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| {
                                    if let Some(s) = s {
                                        s.form_mut().category = value;
                                    }
                                });
                            }
                        />
                    </label>
                    {image_input(session, |f| f.image.clone(), |f, v| f.image = v)}
                    {text_area(
                        FieldSpec::required("Descripción", "Descripción detallada de los beneficios..."),
                        session,
                        |f| f.description.clone(),
                        |f, v| f.description = v,
                    )}
                    {text_input(
                        FieldSpec::required("Hierbas", "Manzanilla, Jengibre, Menta, Hinojo")
                            .with_hint("Separadas por comas"),
                        session,
                        |f| f.herbs.clone(),
                        |f, v| f.herbs = v,
                    )}
                    {text_input(
                        FieldSpec::required("Síntomas", "Indigestión, Náuseas, Gases, Dolor estomacal")
                            .with_hint("Separados por comas"),
                        session,
                        |f| f.symptoms.clone(),
                        |f, v| f.symptoms = v,
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
