//! Herb directory editor.

use content::{Herb, HerbForm, RecordId};
use leptos::prelude::*;

use super::{close_if_editing, heading, submit_label};
use crate::components::form_fields::{FieldSpec, Session, image_input, text_area, text_input};
use crate::state::editors::{Feedback, open_editor};

#[component]
pub fn HerbEditor() -> impl IntoView {
    let feedback = Feedback::from_context();
    let editor = RwSignal::new(open_editor::<Herb>());
    let session: Session<HerbForm> = RwSignal::new(None);

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
                .map(|herb| {
                    let id = herb.id;
                    view! {
                        <li class="admin-list__item">
                            <img class="admin-list__thumb" src=herb.image.clone() alt=herb.name.clone()/>
                            <div class="admin-list__body">
                                <strong>{herb.name.clone()}</strong>
                                <em>{herb.scientific_name.clone()}</em>
                                <span class="admin-list__meta">{herb.benefits.join(", ")}</span>
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
                <h2>"Gestionar Hierbas"</h2>
                <button class="btn btn--primary" type="button" on:click=on_create>"+ Agregar Hierba"</button>
            </header>
            <Show when=move || session.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <h3>{heading(session, "Nueva Hierba", "Editar Hierba")}</h3>
                    {text_input(
                        FieldSpec::required("Nombre", "Ej: Manzanilla"),
                        session,
                        |f| f.name.clone(),
                        |f, v| f.name = v,
                    )}
                    {text_input(
                        FieldSpec::required("Nombre Científico", "Ej: Matricaria chamomilla"),
                        session,
                        |f| f.scientific_name.clone(),
                        |f, v| f.scientific_name = v,
                    )}
                    {image_input(session, |f| f.image.clone(), |f, v| f.image = v)}
                    {text_area(
                        FieldSpec::required("Descripción", "Descripción detallada de la hierba..."),
                        session,
                        |f| f.description.clone(),
                        |f, v| f.description = v,
                    )}
                    {text_input(
                        FieldSpec::required("Beneficios", "Relajante, Antiinflamatoria, Digestiva")
                            .with_hint("Separados por comas"),
                        session,
                        |f| f.benefits.clone(),
                        |f, v| f.benefits = v,
                    )}
                    {text_area(
                        FieldSpec::required("Usos", "Cómo se usa esta hierba..."),
                        session,
                        |f| f.uses.clone(),
                        |f, v| f.uses = v,
                    )}
                    {text_area(
                        FieldSpec::optional("Precauciones", "Precauciones importantes..."),
                        session,
                        |f| f.precautions.clone(),
                        |f, v| f.precautions = v,
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
