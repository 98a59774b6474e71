//! Banner image carousel and full-screen viewer.

use leptos::prelude::*;

use crate::net::types::BannerImage;
use crate::state::project::ProjectDetailState;

#[component]
pub fn ImageGallery(#[prop(into)] images: Signal<Vec<BannerImage>>, state: RwSignal<ProjectDetailState>) -> impl IntoView {
    let carousel = move || state.with(|s| s.gallery.carousel);
    let open_index = move || state.with(|s| s.gallery.open);
    let image_at = move |index: usize| images.with(|all| all.get(index).cloned());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => state.update(|s| s.gallery.prev()),
        "ArrowRight" => state.update(|s| s.gallery.next()),
        "Escape" => state.update(|s| s.gallery.close()),
        _ => {}
    };

    view! {
        <section class="gallery">
            <Show when=move || !images.with(Vec::is_empty)>
                <div class="gallery__carousel">
                    <button class="gallery__nav" on:click=move |_| state.update(|s| s.gallery.carousel_prev())>
                        "‹"
                    </button>
                    {move || {
                        image_at(carousel())
                            .map(|image| {
                                let index = carousel();
                                view! {
                                    <img
                                        class="gallery__slide"
                                        src=image.url
                                        alt=image.caption.unwrap_or_default()
                                        on:click=move |_| state.update(|s| {
                                            s.gallery.open(index);
                                        })
                                    />
                                }
                            })
                    }}
                    <button class="gallery__nav" on:click=move |_| state.update(|s| s.gallery.carousel_next())>
                        "›"
                    </button>
                </div>
            </Show>
            {move || {
                open_index()
                    .and_then(image_at)
                    .map(|image| {
                        view! {
                            <div class="gallery__viewer" tabindex="0" on:keydown=on_keydown>
                                <button class="gallery__close" on:click=move |_| state.update(|s| s.gallery.close())>
                                    "✕"
                                </button>
                                <button class="gallery__nav gallery__nav--prev" on:click=move |_| state.update(|s| s.gallery.prev())>
                                    "‹"
                                </button>
                                <img class="gallery__full" src=image.url alt=image.caption.clone().unwrap_or_default()/>
                                <button class="gallery__nav gallery__nav--next" on:click=move |_| state.update(|s| s.gallery.next())>
                                    "›"
                                </button>
                                <p class="gallery__caption">{image.caption.unwrap_or_default()}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
