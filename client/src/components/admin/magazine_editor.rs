//! Magazine page editor with manual ordering.
//!
//! Page order here is the order the home-page carousel shows.

use content::{Direction, MagazinePage, PageForm, RecordId};
use leptos::prelude::*;

use super::{close_if_editing, heading, submit_label};
use crate::components::form_fields::{FieldSpec, Session, image_input, text_area, text_input};
use crate::state::editors::{Feedback, open_editor};

#[component]
pub fn MagazineEditor() -> impl IntoView {
    let feedback = Feedback::from_context();
    let editor = RwSignal::new(open_editor::<MagazinePage>());
    let session: Session<PageForm> = RwSignal::new(None);

    let on_create = move |_| session.set(Some(editor.with_untracked(|e| e.open_create())));
    let on_edit = move |id: RecordId| session.set(editor.with_untracked(|e| e.open_edit(id)));
    let on_delete = move |id: RecordId| {
        if feedback.apply(editor, |e| e.delete(id).map(Some)) {
            close_if_editing(session, id);
        }
    };
    let on_move = move |id: RecordId, direction: Direction| {
        feedback.apply(editor, |e| e.reorder(id, direction));
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
            let last = e.records().len().saturating_sub(1);
            e.records()
                .iter()
                .enumerate()
                .map(|(index, page)| {
                    let id = page.id;
                    view! {
                        <li class="admin-list__item">
                            <span class="admin-list__index">{index + 1}</span>
                            <img class="admin-list__thumb" src=page.image.clone() alt=page.title.clone()/>
                            <div class="admin-list__body">
                                <strong>{page.title.clone()}</strong>
                                <span class="admin-list__meta">{excerpt(&page.content)}</span>
                            </div>
                            <div class="admin-list__actions">
                                <button
                                    class="btn btn--icon"
                                    type="button"
                                    title="Mover arriba"
                                    disabled=index == 0
                                    on:click=move |_| on_move(id, Direction::Earlier)
                                >
                                    "↑"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    type="button"
                                    title="Mover abajo"
                                    disabled=index == last
                                    on:click=move |_| on_move(id, Direction::Later)
                                >
                                    "↓"
                                </button>
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
                <h2>"Gestionar Revista"</h2>
                <button class="btn btn--primary" type="button" on:click=on_create>"+ Agregar Página"</button>
            </header>
            <Show when=move || session.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <h3>{heading(session, "Nueva Página", "Editar Página")}</h3>
                    {text_input(
                        FieldSpec::required("Título", "Ej: Bienvenidos a Natura Revista"),
                        session,
                        |f| f.title.clone(),
                        |f, v| f.title = v,
                    )}
                    {image_input(session, |f| f.image.clone(), |f, v| f.image = v)}
                    {text_area(
                        FieldSpec::required(
                            "Contenido",
                            "Escribe el contenido que aparecerá en esta página de la revista...",
                        ),
                        session,
                        |f| f.content.clone(),
                        |f, v| f.content = v,
                    )}
                    <div class="admin-form__actions">
                        <button class="btn" type="button" on:click=move |_| session.set(None)>"Cancelar"</button>
                        <button class="btn btn--primary" type="submit">{submit_label(session)}</button>
                    </div>
                </form>
            </Show>
            <ol class="admin-list admin-list--ordered">{rows}</ol>
        </section>
    }
}

const EXCERPT_CHARS: usize = 80;

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() { format!("{head}…") } else { head }
}
