//! Inputs bound to one field of an open [`EditSession`] form.
//!
//! DESIGN
//! ======
//! Field access is passed as plain `fn` pointers so one helper serves every
//! form type without a component per field. When no session is open the
//! inputs read as empty and writes are dropped.

use content::EditSession;
use leptos::prelude::*;

use crate::components::image_field::ImageField;

pub type Session<F> = RwSignal<Option<EditSession<F>>>;

fn read<F: Send + Sync + 'static>(session: Session<F>, get: fn(&F) -> String) -> String {
    session.with(|s| s.as_ref().map(|s| get(s.form())).unwrap_or_default())
}

fn write<F: Send + Sync + 'static>(session: Session<F>, set: fn(&mut F, String), value: String) {
    session.update(|s| {
        if let Some(s) = s {
            set(s.form_mut(), value);
        }
    });
}

/// Label, placeholder, and validation marker for one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(label: &'static str, placeholder: &'static str) -> Self {
        Self { label, placeholder, hint: "", required: true }
    }

    pub const fn optional(label: &'static str, placeholder: &'static str) -> Self {
        Self { label, placeholder, hint: "", required: false }
    }

    #[must_use]
    pub const fn with_hint(self, hint: &'static str) -> Self {
        Self { hint, ..self }
    }
}

/// Single-line text input; the hint, if any, sits under the label.
pub fn text_input<F: Send + Sync + 'static>(
    spec: FieldSpec,
    session: Session<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{spec.label}</span>
            <Show when=move || !spec.hint.is_empty()>
                <span class="field__hint">{spec.hint}</span>
            </Show>
            <input
                class="field__input"
                type="text"
                placeholder=spec.placeholder
                required=spec.required
                prop:value=move || read(session, get)
                on:input=move |ev| write(session, set, event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line variant of [`text_input`].
pub fn text_area<F: Send + Sync + 'static>(
    spec: FieldSpec,
    session: Session<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{spec.label}</span>
            <Show when=move || !spec.hint.is_empty()>
                <span class="field__hint">{spec.hint}</span>
            </Show>
            <textarea
                class="field__textarea"
                rows="4"
                placeholder=spec.placeholder
                required=spec.required
                prop:value=move || read(session, get)
                on:input=move |ev| write(session, set, event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Image picker bound to the form's image field.
pub fn image_input<F: Send + Sync + 'static>(
    session: Session<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    let value = Signal::derive(move || read(session, get));
    let on_change = Callback::new(move |url: String| write(session, set, url));
    view! {
        <div class="field">
            <span class="field__label">"Imagen"</span>
            <ImageField value=value on_change=on_change/>
        </div>
    }
}
