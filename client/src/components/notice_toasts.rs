//! Stacked toast notices; click one to dismiss it early.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

#[component]
pub fn NoticeToasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For each=move || notices.get().items key=|toast| toast.id let:toast>
                <div
                    class="toast"
                    class:toast--failure=toast.notice.is_failure()
                    on:click=move |_| {
                        notices.update(|s| {
                            s.dismiss(toast.id);
                        });
                    }
                >
                    <strong class="toast__title">{toast.notice.title.clone()}</strong>
                    <p class="toast__description">{toast.notice.description.clone()}</p>
                </div>
            </For>
        </div>
    }
}
