use leptos::{
    component,
    view,
    IntoView,
    RwSignal,
    Show,
    SignalUpdate,
    SignalWith,
};

use super::spinner::Spinner;
use crate::view_state::AvatarImage;

stylance::import_crate_style!(style, "src/components/avatar.module.scss");

/// Round profile picture.
///
/// Shows a spinner until the image has loaded. If it fails to load, the
/// placeholder is shown instead.
#[component]
pub fn Avatar(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    image: RwSignal<AvatarImage>,
) -> impl IntoView {
    let loaded = move || image.with(AvatarImage::is_loaded);
    let image_src = move || image.with(|image| image.src(&src).to_owned());

    view! {
        <div class=style::avatar>
            <Show when=move || !loaded()>
                <div class=style::overlay>
                    <Spinner small=true />
                </div>
            </Show>
            <img
                class=style::image
                src=image_src
                alt=alt
                data-loaded=loaded
                on:load=move |_| image.update(AvatarImage::on_load)
                on:error=move |_| image.update(AvatarImage::on_error)
            />
        </div>
    }
}
