use kotoba_core::catalog::ImageRef;
use kotoba_core::state::ImageFallbacks;
use leptos::prelude::*;

/// Record image that falls back once. After any failure a placeholder sits
/// over the image; the fallback source stays mounted once exhausted.
///
/// `fallbacks` is owned by the enclosing view, so the state lives exactly as
/// long as that view instance.
#[component]
pub fn CatalogImage(
    id: u32,
    image: ImageRef,
    #[prop(into)] alt: String,
    fallbacks: RwSignal<ImageFallbacks>,
) -> impl IntoView {
    let image = StoredValue::new(image);
    let current = move || image.with_value(|img| fallbacks.with(|f| f.get(id, img)));

    let on_error = move |_| image.with_value(|img| fallbacks.update(|f| f.on_error(id, img)));
    let on_load = move |_| image.with_value(|img| fallbacks.update(|f| f.on_load(id, img)));

    view! {
        <div class="catalog-image">
            <img
                src=move || current().src().to_string()
                alt=alt
                on:error=on_error
                on:load=on_load
            />
            <Show when=move || current().shows_placeholder()>
                <div class="image-placeholder" aria-hidden="true">"🖼"</div>
            </Show>
        </div>
    }
}
