//! Page-pair magazine carousel on the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering only. Paging rules live in [`content::carousel::Carousel`]:
//! this component starts a flip, waits [`FLIP_DELAY_MS`] for the CSS
//! animation, then lands it. Buttons are disabled for the whole flip.

use content::MagazinePage;
use content::carousel::{Carousel, FLIP_DELAY_MS, Flip};
use leptos::prelude::*;

use crate::state::content_hub::ContentHub;
use crate::util::viewport;

#[component]
pub fn MagazineFlip() -> impl IntoView {
    let snapshot = expect_context::<ContentHub>().snapshot();
    let carousel = RwSignal::new(Carousel::new(
        snapshot.with_untracked(|s| s.magazine_pages.len()),
        viewport::FALLBACK_WIDTH_PX,
    ));

    Effect::new(move || {
        let len = snapshot.with(|s| s.magazine_pages.len());
        carousel.update(|c| c.set_len(len));
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || carousel.update(|c| c.set_viewport_width(viewport::width())));
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            carousel.update(|c| c.set_viewport_width(viewport::width()));
        });
        on_cleanup(move || resize.remove());
    }

    let flip = move |direction: Flip| {
        let Some(pending) = carousel.try_update(|c| c.begin(direction)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(FLIP_DELAY_MS, move || carousel.update(|c| c.complete(pending))).forget();
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = FLIP_DELAY_MS;
            carousel.update(|c| c.complete(pending));
        }
    };

    let visible = move || {
        let range = carousel.with(Carousel::visible_range);
        snapshot.with(|s| s.magazine_pages.get(range).map(<[MagazinePage]>::to_vec).unwrap_or_default())
    };

    view! {
        <div class="magazine" class:magazine--narrow=move || carousel.with(Carousel::is_narrow)>
            <button
                class="magazine__nav magazine__nav--prev"
                type="button"
                aria-label="Página anterior"
                disabled=move || !carousel.with(Carousel::can_retreat)
                on:click=move |_| flip(Flip::Previous)
            >
                "‹"
            </button>
            <div class="magazine__spread">
                <div class="magazine__pages" class:magazine__pages--flipping=move || carousel.with(Carousel::is_transitioning)>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <article class="magazine__page">
                                        <img class="magazine__image" src=page.image alt=page.title.clone()/>
                                        <h3 class="magazine__title">{page.title}</h3>
                                        <p class="magazine__content">{page.content}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <p class="magazine__indicator">{move || carousel.with(Carousel::label)}</p>
            </div>
            <button
                class="magazine__nav magazine__nav--next"
                type="button"
                aria-label="Página siguiente"
                disabled=move || !carousel.with(Carousel::can_advance)
                on:click=move |_| flip(Flip::Next)
            >
                "›"
            </button>
        </div>
    }
}
