//! Update function of the product form.
//!
//! File selection follows the two screens' habits: adding a product replaces
//! the picked set on every selection, editing appends to it.

use common::form::{AfterSubmit, FormMode, SubmitStart};
use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::api;
use crate::helpers::show_toast;
use crate::routes::Route;

use super::messages::Msg;
use super::state::ProductForm;

pub fn update(component: &mut ProductForm, ctx: &Context<ProductForm>, msg: Msg) -> bool {
    let form = &mut component.form;
    match msg {
        Msg::Loaded(id, Ok(product)) => form.loaded(id, &product),
        Msg::Loaded(id, Err(err)) => {
            warn!("Product could not be loaded:", err.to_string());
            form.load_failed(id)
        }
        Msg::SetField(field, value) => {
            form.draft_mut().set(field, value);
            true
        }
        Msg::FilesSelected(files) => {
            if files.is_empty() {
                return false;
            }
            let mode = form.mode();
            let draft = form.draft_mut();
            match mode {
                FormMode::Create => draft.replace_attachments(files),
                FormMode::Edit { .. } => draft.attach(files),
            };
            true
        }
        Msg::RemoveAttachment(index) => form.draft_mut().remove_attachment(index).is_some(),
        Msg::RemoveExisting(index) => form.draft_mut().remove_existing(index).is_some(),
        Msg::Submit => match form.begin_submit() {
            SubmitStart::Busy => false,
            SubmitStart::Invalid(_) => true,
            SubmitStart::Proceed => {
                let mode = form.mode();
                match api::multipart_body(form.draft(), mode) {
                    Ok(body) => {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let result = api::submit_product(mode, body).await;
                            link.send_message(Msg::Submitted(mode, result));
                        });
                    }
                    Err(err) => {
                        form.submit_failed(mode, err.to_string());
                    }
                }
                true
            }
        },
        Msg::Submitted(mode, Ok(product)) => {
            let Some(after) = form.submit_succeeded(mode) else {
                return false;
            };
            log!(format!("Saved product {}", product.id));
            let route = match after {
                AfterSubmit::Home => Route::Home,
                AfterSubmit::ProductDetail(id) => Route::ProductDetail { id },
            };
            show_toast("Đã lưu sản phẩm.");
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&route);
            }
            true
        }
        Msg::Submitted(mode, Err(err)) => form.submit_failed(mode, err.to_string()),
    }
}
