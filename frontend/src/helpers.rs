//! Browser utilities shared by the product views.
//!
//! - **User feedback**: a temporary toast for non-blocking notices, plus the
//!   blocking `alert`/`confirm` dialogs used around deletion.
//! - **File input**: collecting the files picked in an `<input type="file">`.

use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement};

/// Displays a temporary notification message at the bottom of the screen.
///
/// This function creates and injects a styled `div` into the DOM to provide
/// non-blocking feedback. The product form calls it after a successful save,
/// right before navigating away, because the form itself is unmounted and
/// can no longer show a message. The text is inserted as plain text, never
/// as markup, and the toast removes itself after three seconds.
///
/// # Arguments
/// * `message` - The text content to display in the toast.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Asks the user a yes/no question through the browser's blocking dialog.
///
/// Used by the product list before deleting. Anything but an explicit "OK",
/// including a missing `window`, counts as a refusal so that no request is
/// ever sent without consent.
///
/// # Returns
/// `true` only when the user confirmed.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Shows a blocking alert. Used for failed deletes, which leave the list
/// untouched and must not go unnoticed.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Takes the files currently selected in `input`.
///
/// The input is cleared afterwards so that picking the same file again, for
/// example after removing its preview, still fires a `change` event.
///
/// # Arguments
/// * `input` - The `<input type="file">` that fired the event.
///
/// # Returns
/// The picked files in selection order; empty when nothing was picked.
pub fn take_selected_files(input: &HtmlInputElement) -> Vec<File> {
    let files: Vec<File> = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}
