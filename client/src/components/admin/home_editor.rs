//! Home content editor with explicit save and discard.

use content::notice::storage_failure;
use content::{ContentStore, HomeEditor, HomeField};
use leptos::prelude::*;

use crate::state::editors::Feedback;
use crate::state::notices::notify;
use crate::util::browser_storage::BrowserStorage;

/// Form label, placeholder, and whether the field takes several lines.
fn field_meta(field: HomeField) -> (&'static str, &'static str, bool) {
    match field {
        HomeField::Title => ("Título", "Natura", false),
        HomeField::Subtitle => ("Subtítulo", "Revista", false),
        HomeField::Description => ("Descripción", "Descripción principal...", true),
        HomeField::ButtonText => ("Texto del botón", "Explorar Revista", false),
        HomeField::HeroTitle => ("Título de la sección revista", "Experimenta la Revista Virtual", false),
        HomeField::HeroSubtitle => ("Subtítulo de la sección revista", "Navega de manera fluida...", true),
    }
}

#[component]
pub fn HomeContentEditor() -> impl IntoView {
    let feedback = Feedback::from_context();
    let editor = RwSignal::new(HomeEditor::open(ContentStore::new(BrowserStorage)));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match editor.try_update(HomeEditor::save) {
            Some(Ok(notice)) => feedback.succeeded(Some(notice)),
            Some(Err(e)) => {
                log::warn!("home editor: {e}");
                feedback.failed(storage_failure());
            }
            None => {}
        }
    };
    let on_discard = move |_| {
        if let Some(notice) = editor.try_update(HomeEditor::discard) {
            notify(feedback.notices, notice);
        }
    };
    let dirty = move || editor.with(HomeEditor::has_unsaved_changes);

    let fields = HomeField::ALL
        .into_iter()
        .map(|field| {
            let (label, placeholder, multiline) = field_meta(field);
            let value = move || editor.with(|e| field.get(e.draft()).to_owned());
            let on_input = move |ev: leptos::ev::Event| {
                let text = event_target_value(&ev);
                editor.update(|e| e.set_field(field, text));
            };
            let input = if multiline {
                view! {
                    <textarea class="field__textarea" rows="3" placeholder=placeholder prop:value=value on:input=on_input></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input class="field__input" type="text" placeholder=placeholder prop:value=value on:input=on_input/>
                }
                .into_any()
            };
            view! {
                <label class="field">
                    <span class="field__label">{label}</span>
                    {input}
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="admin-editor">
            <header class="admin-editor__header">
                <h2>"Editar Página Principal"</h2>
                <Show when=dirty>
                    <span class="badge badge--warning">"Cambios sin guardar"</span>
                </Show>
            </header>
            <form class="admin-form" on:submit=on_save>
                {fields}
                <div class="admin-form__actions">
                    <button class="btn" type="button" disabled=move || !dirty() on:click=on_discard>
                        "Descartar"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || !dirty()>
                        "Guardar Cambios"
                    </button>
                </div>
            </form>
            <aside class="admin-preview">
                <h3>"Vista previa"</h3>
                <div class="hero hero--preview">
                    <h1 class="hero__title">
                        {move || editor.with(|e| e.draft().title.clone())}
                        <span class="hero__subtitle">{move || editor.with(|e| e.draft().subtitle.clone())}</span>
                    </h1>
                    <p class="hero__description">{move || editor.with(|e| e.draft().description.clone())}</p>
                    <span class="btn btn--primary">{move || editor.with(|e| e.draft().button_text.clone())}</span>
                </div>
            </aside>
        </section>
    }
}
