use common::display::PLACEHOLDER_IMAGE;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::api;

/// Image of a stored upload. Missing references and broken files show the
/// placeholder instead.
pub fn stored_image(reference: Option<&str>, alt: &str, class: &'static str) -> Html {
    let src = reference
        .map(|reference| api::config().upload_url(reference))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let onerror = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if img.src() != PLACEHOLDER_IMAGE {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    });

    html! {
        <img {src} alt={alt.to_string()} {class} {onerror} />
    }
}
