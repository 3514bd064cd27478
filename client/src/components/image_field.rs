//! Image picker: upload a local JPEG/PNG or paste a URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploads are validated with [`content::image::validate_upload`] before any
//! bytes are read, then embedded as a `data:` URL so the image lives in the
//! same `localStorage` value as its record.

use content::image::{self, ImageSource};
use leptos::prelude::*;

use crate::state::notices::{NoticeState, notify};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    File,
    #[default]
    Url,
}

#[component]
pub fn ImageField(
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(default = "Subir imagen o pegar URL")] placeholder: &'static str,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let mode = RwSignal::new(Mode::default());
    let url_input = RwSignal::new(value.get_untracked());
    let busy = RwSignal::new(false);

    let apply_url = move |_| match image::normalize_url(&url_input.get_untracked()) {
        Ok(url) => {
            on_change.run(url);
            notify(notices, image::url_applied_notice());
        }
        Err(e) => notify(notices, e.notice()),
    };

    let clear = move |_| {
        on_change.run(String::new());
        url_input.set(String::new());
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            upload(file, on_change, notices, busy);
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, busy);
    };

    let preview = move || {
        let current = value.get();
        let caption = match ImageSource::classify(&current) {
            ImageSource::Empty => return view! { <p class="image-field__empty">"Sin imagen"</p> }.into_any(),
            ImageSource::Remote(url) => url.to_owned(),
            ImageSource::Embedded { mime } => format!("Archivo incrustado ({mime})"),
        };
        view! {
            <figure class="image-field__preview">
                <img
                    src=current.clone()
                    alt="Vista previa"
                    on:error=move |_| notify(notices, image::broken_image_notice())
                />
                <figcaption>{caption}</figcaption>
                <button class="btn btn--ghost" type="button" on:click=clear>"Quitar"</button>
            </figure>
        }
        .into_any()
    };

    view! {
        <div class="image-field">
            <div class="image-field__modes" role="tablist">
                <button
                    type="button"
                    class="image-field__mode"
                    class:image-field__mode--active=move || mode.get() == Mode::File
                    on:click=move |_| mode.set(Mode::File)
                >
                    "Subir Archivo"
                </button>
                <button
                    type="button"
                    class="image-field__mode"
                    class:image-field__mode--active=move || mode.get() == Mode::Url
                    on:click=move |_| mode.set(Mode::Url)
                >
                    "URL de Imagen"
                </button>
            </div>
            <Show
                when=move || mode.get() == Mode::File
                fallback=move || {
                    view! {
                        <div class="image-field__url">
                            <input
                                class="field__input"
                                type="url"
                                placeholder=placeholder
                                prop:value=move || url_input.get()
                                on:input=move |ev| url_input.set(event_target_value(&ev))
                            />
                            <button class="btn" type="button" on:click=apply_url>"Usar URL"</button>
                        </div>
                    }
                }
            >
                <label class="image-field__drop">
                    <span>{move || if busy.get() { "Procesando..." } else { "Selecciona una imagen JPG o PNG (máx. 5MB)" }}</span>
                    <input
                        class="image-field__file"
                        type="file"
                        accept=image::ACCEPTED_TYPES.join(",")
                        disabled=move || busy.get()
                        on:change=on_file
                    />
                </label>
            </Show>
            {preview}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn upload(file: web_sys::File, on_change: Callback<String>, notices: RwSignal<NoticeState>, busy: RwSignal<bool>) {
    let mime = file.type_();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    if let Err(e) = image::validate_upload(&mime, size) {
        notify(notices, e.notice());
        return;
    }
    busy.set(true);
    leptos::task::spawn_local(async move {
        let embedded = match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => image::embed_upload(&mime, &js_sys::Uint8Array::new(&buffer).to_vec()),
            Err(e) => Err(image::ImageError::Read(format!("{e:?}"))),
        };
        match embedded {
            Ok(url) => {
                on_change.run(url);
                notify(notices, image::uploaded_notice());
            }
            Err(e) => notify(notices, e.notice()),
        }
        busy.set(false);
    });
}
